//! # treeloclib
//!
//! A lines of code inventory library that answers "how much code, of what
//! kind, lives where" for any source tree.
//!
//! ## Overview
//!
//! Given a root directory, the library produces one bucket of statistics per
//! top-level directory, plus a `root` bucket for files sitting directly
//! under the root. Every line of every counted file is classified as one of:
//!
//! - **Blank**: Whitespace-only lines
//! - **Comment**: Lines led by `//`, `#` or `*`, and lines inside `/* ... */`
//! - **Code**: Everything else
//!
//! Each bucket also keeps a histogram of file extensions.
//!
//! ## Pipeline
//!
//! - [`source`]: fixed extension/directory policy, glob filters, tree walking
//! - [`data`]: the line classifier, statistics types and the aggregator
//! - [`report`]: totals, percentages, sorted breakdown, extension ranking
//! - [`output`]: table-ready strings for presentation
//!
//! The classifier is a heuristic rather than a lexer: it only looks at the
//! leading token of each line and knows nothing about string literals or
//! language-specific comment syntax.
//!
//! ## Example
//!
//! ```rust
//! use treeloclib::{analyze, count_file, Report, ScanOptions, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a temporary project
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("lib/sub")).unwrap();
//! fs::write(dir.path().join("lib/a.js"), "// a\nconst a = 1;\n").unwrap();
//! fs::write(dir.path().join("lib/sub/b.js"), "\nconst b = 2;\n").unwrap();
//! fs::write(dir.path().join("index.ts"), "export {};\n").unwrap();
//!
//! // Count a single file
//! let counts = count_file(dir.path().join("lib/a.js")).unwrap();
//! assert_eq!(counts.comment, 1);
//!
//! // Analyze the whole tree: nested files collapse into "lib"
//! let result = analyze(dir.path(), ScanOptions::new()).unwrap();
//! assert_eq!(result.directory("lib").unwrap().files, 2);
//! assert_eq!(result.root_files().unwrap().files, 1);
//!
//! // Narrow the scope with globs
//! let filter = FilterConfig::new().exclude("lib/sub/**").unwrap();
//! let result = analyze(dir.path(), ScanOptions::new().filter(filter)).unwrap();
//! assert_eq!(result.directory("lib").unwrap().files, 1);
//!
//! // Summarize
//! let report = Report::from_result(&result, 10);
//! assert_eq!(report.buckets[0].name, "lib");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod report;
pub mod source;

pub use data::{
    analyze, classify, classify_file, classify_line, classify_str, count_file,
    decode_dropping_invalid, split_lines, Aggregator, AnalysisResult, BucketKey, BucketStats,
    ClassifierState, FileClassification, LineKind, ScanOptions,
};
pub use error::TreelocError;
pub use output::{ReportTable, TableRow};
pub use report::{
    rank_extensions, BucketRow, ExtensionCount, Percentages, Report, Totals,
    DEFAULT_TOP_EXTENSIONS,
};
pub use source::{
    extension_key, is_code_file, should_skip_directory, walk, FilterConfig, CODE_EXTENSIONS,
    SKIP_DIRS,
};

/// Result type for treeloclib operations
pub type Result<T> = std::result::Result<T, TreelocError>;
