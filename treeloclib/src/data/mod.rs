//! Data collection: classify files and aggregate statistics.
//!
//! This module handles the second stage of the pipeline - reading the files
//! the walker found and rolling their line counts up into buckets. It provides:
//!
//! - **Classification**: a two-state line classifier (`classify`, `classify_file`)
//! - **Statistics**: core data structures (`FileClassification`, `BucketStats`, ...)
//! - **Aggregation**: the additive, order-independent `Aggregator`
//! - **Counting**: high-level API (`analyze`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeloclib::data::{analyze, ScanOptions};
//!
//! let result = analyze(".", ScanOptions::new())?;
//! println!("Total lines: {}", result.total().lines);
//! ```

pub mod aggregator;
pub mod classifier;
pub mod counter;
pub mod stats;

pub use aggregator::Aggregator;
pub use classifier::{
    classify, classify_file, classify_line, classify_str, decode_dropping_invalid, split_lines,
    ClassifierState, LineKind,
};
pub use counter::{analyze, count_file, ScanOptions};
pub use stats::{AnalysisResult, BucketKey, BucketStats, FileClassification};
