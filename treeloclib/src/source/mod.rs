//! Source discovery: find files to analyze.
//!
//! This module handles the first stage of the pipeline - deciding what to
//! look at. It provides:
//!
//! - **Policy**: the fixed extension allow-list and directory block-list
//! - **Filtering**: optional include/exclude glob patterns
//! - **Walking**: root enumeration into buckets and recursive descent
//!
//! ## Example
//!
//! ```rust,ignore
//! use treeloclib::source::{is_code_file, should_skip_directory, FilterConfig};
//!
//! assert!(is_code_file(Path::new("src/app.ts")));
//! assert!(should_skip_directory(Path::new("node_modules")));
//!
//! let filter = FilterConfig::new().exclude("**/generated/**")?;
//! ```

pub mod filter;
pub mod walker;

pub use filter::{
    extension_key, is_code_file, should_skip_directory, FilterConfig, CODE_EXTENSIONS, SKIP_DIRS,
};
pub use walker::{plan_root, walk, walk_bucket, RootPlan};
