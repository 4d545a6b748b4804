//! Report assembly: totals, percentages and rankings.
//!
//! This module handles the third stage of the pipeline - turning the raw
//! [`AnalysisResult`](crate::AnalysisResult) into what a reader wants to see:
//!
//! - **Totals**: sums across every bucket
//! - **Percentages**: code / comment / blank share of all lines
//! - **Breakdown**: buckets sorted by line count, largest first
//! - **Rankings**: most common file extensions
//!
//! ## Example
//!
//! ```rust
//! use treeloclib::{analyze, ScanOptions};
//! use treeloclib::report::Report;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! std::fs::create_dir(dir.path().join("lib")).unwrap();
//! std::fs::write(dir.path().join("lib/a.rs"), "// a\nfn a() {}\n").unwrap();
//!
//! let result = analyze(dir.path(), ScanOptions::new()).unwrap();
//! let report = Report::from_result(&result, 10);
//! for bucket in &report.buckets {
//!     println!("{}: {} lines", bucket.name, bucket.totals.lines);
//! }
//! assert_eq!(report.buckets[0].totals.lines, 2);
//! ```

pub mod summary;

pub use summary::{
    rank_extensions, BucketRow, ExtensionCount, Percentages, Report, Totals,
    DEFAULT_TOP_EXTENSIONS,
};
