//! High-level analysis API.
//!
//! This module provides the main entry points for inventorying a source
//! tree, along with the options that control a traversal run.

use std::path::Path;

use tracing::info;

use crate::source::filter::FilterConfig;
use crate::source::walker::walk;
use crate::Result;

use super::classifier::classify_file;
use super::stats::{AnalysisResult, FileClassification};

/// Options for a traversal run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extra glob narrowing on top of the fixed policy
    pub filter: FilterConfig,
    /// Walk top-level buckets on the rayon pool
    pub parallel: bool,
    /// Follow symbolic links when classifying entries and descending
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            filter: FilterConfig::new(),
            parallel: true,
            follow_links: true,
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Enable or disable parallel bucket traversal.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable following symbolic links.
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

/// Analyze a source tree.
///
/// Every code file directly under `path` is attributed to the `root`
/// bucket; every other file to the top-level directory it lives under.
///
/// # Example
///
/// ```rust
/// use treeloclib::{analyze, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("lib")).unwrap();
/// fs::write(dir.path().join("lib/a.js"), "// a\nconst a = 1;\n").unwrap();
/// fs::write(dir.path().join("package.json"), "{}\n").unwrap();
///
/// let result = analyze(dir.path(), ScanOptions::new()).unwrap();
/// assert_eq!(result.directory("lib").unwrap().code_lines, 1);
/// assert_eq!(result.root_files().unwrap().files, 1);
/// ```
pub fn analyze(path: impl AsRef<Path>, options: ScanOptions) -> Result<AnalysisResult> {
    let path = path.as_ref();
    info!(root = %path.display(), parallel = options.parallel, "analyzing tree");
    walk(path, &options)
}

/// Classify a single file.
///
/// # Example
///
/// ```rust,ignore
/// use treeloclib::count_file;
///
/// let counts = count_file("src/main.rs")?;
/// println!("Code: {}, Comments: {}", counts.code, counts.comment);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<FileClassification> {
    classify_file(path)
}
