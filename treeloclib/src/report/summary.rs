//! Report built from one traversal run.
//!
//! Everything here is derived; nothing feeds back into the walker.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::stats::{AnalysisResult, BucketStats};

/// Number of extensions listed by default.
pub const DEFAULT_TOP_EXTENSIONS: usize = 10;

/// Sums across every bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files: u64,
    pub lines: u64,
    pub code_lines: u64,
    pub comment_lines: u64,
    pub blank_lines: u64,
}

impl From<&BucketStats> for Totals {
    fn from(stats: &BucketStats) -> Self {
        Self {
            files: stats.files,
            lines: stats.lines,
            code_lines: stats.code_lines,
            comment_lines: stats.comment_lines,
            blank_lines: stats.blank_lines,
        }
    }
}

/// Share of all lines per category, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentages {
    pub code: f64,
    pub comment: f64,
    pub blank: f64,
}

impl Percentages {
    /// `None` when there are no lines at all.
    pub fn from_totals(totals: &Totals) -> Option<Self> {
        if totals.lines == 0 {
            return None;
        }
        let total = totals.lines as f64;
        Some(Self {
            code: totals.code_lines as f64 / total * 100.0,
            comment: totals.comment_lines as f64 / total * 100.0,
            blank: totals.blank_lines as f64 / total * 100.0,
        })
    }
}

/// One bucket in the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRow {
    /// Directory name, or `root` for loose files
    pub name: String,
    pub is_root: bool,
    #[serde(flatten)]
    pub totals: Totals,
}

/// File count for one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionCount {
    pub extension: String,
    pub files: u64,
}

/// Everything the presentation layer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The analyzed root directory
    pub root: PathBuf,
    pub totals: Totals,
    /// Absent when the tree had no lines
    pub percentages: Option<Percentages>,
    /// Buckets with at least one file, most lines first
    pub buckets: Vec<BucketRow>,
    /// Most common extensions, most files first
    pub top_extensions: Vec<ExtensionCount>,
}

impl Report {
    /// Assemble a report, keeping the `top` most common extensions.
    pub fn from_result(result: &AnalysisResult, top: usize) -> Self {
        let totals = Totals::from(&result.total());

        let mut buckets: Vec<BucketRow> = result
            .buckets
            .iter()
            .filter(|(_, stats)| stats.files > 0)
            .map(|(key, stats)| BucketRow {
                name: key.name().to_string(),
                is_root: key.is_root(),
                totals: Totals::from(stats),
            })
            .collect();

        // Ties fall back to the name so equal trees always render the same.
        buckets.sort_by(|a, b| {
            b.totals
                .lines
                .cmp(&a.totals.lines)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| b.is_root.cmp(&a.is_root))
        });

        Self {
            root: result.root.clone(),
            totals,
            percentages: Percentages::from_totals(&totals),
            buckets,
            top_extensions: rank_extensions(result, top),
        }
    }
}

/// Extensions across all buckets ranked by file count, at most `top` entries.
pub fn rank_extensions(result: &AnalysisResult, top: usize) -> Vec<ExtensionCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for stats in result.buckets.values() {
        for (ext, count) in &stats.file_types {
            *counts.entry(ext.as_str()).or_insert(0) += count;
        }
    }

    let mut ranked: Vec<ExtensionCount> = counts
        .into_iter()
        .filter(|(ext, _)| !ext.is_empty())
        .map(|(ext, files)| ExtensionCount {
            extension: ext.to_string(),
            files,
        })
        .collect();

    // BTreeMap iteration is already sorted by name, and the sort is stable.
    ranked.sort_by(|a, b| b.files.cmp(&a.files));
    ranked.truncate(top);
    ranked
}
