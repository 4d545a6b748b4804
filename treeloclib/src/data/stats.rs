//! Core data structures for tree statistics.
//!
//! - [`FileClassification`]: line counts for one file, discarded once recorded
//! - [`BucketStats`]: running totals for one bucket (top-level directory or root files)
//! - [`AnalysisResult`]: every bucket produced by one traversal run
//!
//! All counters only ever grow. Merging two values is plain addition, so the
//! order in which files are recorded never changes the outcome.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for a single file.
///
/// `total == blank + comment + code` holds by construction: the classifier
/// assigns every line to exactly one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileClassification {
    /// Number of lines in the file
    pub total: u64,
    /// Whitespace-only lines
    pub blank: u64,
    /// Comment lines (`//`, `#`, `*`, `/* ... */`)
    pub comment: u64,
    /// Everything else
    pub code: u64,
}

impl FileClassification {
    /// Create a zero-valued classification.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for FileClassification {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            code: self.code + other.code,
        }
    }
}

impl AddAssign for FileClassification {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}

/// Aggregation key: one per root-level entry.
///
/// Loose files directly under the root share [`BucketKey::Root`]. Every
/// non-skipped root-level directory gets its own [`BucketKey::Directory`],
/// so a directory literally named `root` stays separate from the loose files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BucketKey {
    /// Files sitting directly under the analyzed root
    Root,
    /// A top-level directory, keyed by its name
    Directory(String),
}

impl BucketKey {
    /// Bucket for a top-level directory.
    pub fn directory(name: impl Into<String>) -> Self {
        BucketKey::Directory(name.into())
    }

    /// Display name (`"root"` for loose files).
    pub fn name(&self) -> &str {
        match self {
            BucketKey::Root => "root",
            BucketKey::Directory(name) => name,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, BucketKey::Root)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for BucketKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Running totals for one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Files attributed to this bucket, unreadable ones included
    pub files: u64,
    /// Sum of per-file totals
    pub lines: u64,
    pub blank_lines: u64,
    pub comment_lines: u64,
    pub code_lines: u64,
    /// File count per lowercased extension (`".rs"` → 12)
    pub file_types: BTreeMap<String, u64>,
}

impl BucketStats {
    /// Create new all-zero stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's contribution.
    pub fn add_file(&mut self, classification: FileClassification, extension: &str) {
        self.files += 1;
        self.lines += classification.total;
        self.blank_lines += classification.blank;
        self.comment_lines += classification.comment;
        self.code_lines += classification.code;
        *self.file_types.entry(extension.to_string()).or_insert(0) += 1;
    }

    /// Whether the line and file invariants hold.
    pub fn is_consistent(&self) -> bool {
        self.lines == self.blank_lines + self.comment_lines + self.code_lines
            && self.files == self.file_types.values().sum::<u64>()
    }
}

impl AddAssign for BucketStats {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.lines += other.lines;
        self.blank_lines += other.blank_lines;
        self.comment_lines += other.comment_lines;
        self.code_lines += other.code_lines;
        for (ext, count) in other.file_types {
            *self.file_types.entry(ext).or_insert(0) += count;
        }
    }
}

impl Add for BucketStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

/// Every bucket produced by one traversal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The analyzed root directory
    pub root: PathBuf,
    /// Stats per bucket, ordered by key
    pub buckets: BTreeMap<BucketKey, BucketStats>,
}

impl AnalysisResult {
    /// Create an empty result for `root`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            buckets: BTreeMap::new(),
        }
    }

    /// Look up a bucket.
    pub fn get(&self, key: &BucketKey) -> Option<&BucketStats> {
        self.buckets.get(key)
    }

    /// Look up a top-level directory bucket by name.
    pub fn directory(&self, name: &str) -> Option<&BucketStats> {
        self.buckets.get(&BucketKey::directory(name))
    }

    /// Loose root-level files, if any were counted.
    pub fn root_files(&self) -> Option<&BucketStats> {
        self.buckets.get(&BucketKey::Root)
    }

    /// Sum across every bucket.
    pub fn total(&self) -> BucketStats {
        self.buckets
            .values()
            .cloned()
            .fold(BucketStats::new(), |acc, stats| acc + stats)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            name: &'a str,
            is_root: bool,
            stats: &'a BucketStats,
        }

        let entries: Vec<Entry<'_>> = self
            .buckets
            .iter()
            .map(|(key, stats)| Entry {
                name: key.name(),
                is_root: key.is_root(),
                stats,
            })
            .collect();

        let mut state = serializer.serialize_struct("AnalysisResult", 2)?;
        state.serialize_field("root", &self.root)?;
        state.serialize_field("buckets", &entries)?;
        state.end()
    }
}
