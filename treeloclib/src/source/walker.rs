//! Tree walking: root enumeration and per-bucket recursion.
//!
//! The root's immediate entries decide the buckets. Code files directly under
//! the root go to [`BucketKey::Root`]; every directory that survives
//! [`should_skip_directory`] becomes its own bucket and everything beneath it,
//! however deep, is attributed to that one bucket.
//!
//! Unreadable files and directories are logged and skipped. An unreadable
//! file still counts as a file, with zero lines.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::data::aggregator::Aggregator;
use crate::data::classifier::classify_file;
use crate::data::counter::ScanOptions;
use crate::data::stats::{AnalysisResult, BucketKey, BucketStats, FileClassification};
use crate::error::TreelocError;
use crate::Result;

use super::filter::{extension_key, is_code_file, should_skip_directory, FilterConfig};

/// What the root listing produced: loose files and one directory per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootPlan {
    /// Code files directly under the root
    pub files: Vec<PathBuf>,
    /// Non-skipped top-level directories, one bucket each
    pub buckets: Vec<(BucketKey, PathBuf)>,
}

/// Walk `root` and aggregate every matching file into its bucket.
///
/// Fails only if the root is missing, not a directory, or cannot be listed.
pub fn walk(root: impl AsRef<Path>, options: &ScanOptions) -> Result<AnalysisResult> {
    let root = root.as_ref();
    let plan = plan_root(root, options)?;

    debug!(
        root = %root.display(),
        files = plan.files.len(),
        buckets = plan.buckets.len(),
        "starting traversal"
    );

    let mut aggregator = Aggregator::new();

    for file in &plan.files {
        if let Some((classification, extension)) = classify_entry(file) {
            aggregator.record(BucketKey::Root, classification, &extension);
        }
    }

    // Each bucket owns its stats until the join.
    let walked: Vec<(BucketKey, BucketStats)> = if options.parallel {
        plan.buckets
            .into_par_iter()
            .map(|(key, dir)| {
                let stats = walk_bucket(root, &dir, options);
                (key, stats)
            })
            .collect()
    } else {
        plan.buckets
            .into_iter()
            .map(|(key, dir)| {
                let stats = walk_bucket(root, &dir, options);
                (key, stats)
            })
            .collect()
    };

    for (key, stats) in walked {
        // Buckets with no counted file are never created.
        if stats.files > 0 {
            aggregator.absorb(key, stats);
        }
    }

    debug!(buckets = aggregator.len(), "traversal finished");
    Ok(aggregator.finalize(root.to_path_buf()))
}

/// List the root and split its entries into loose files and bucket directories.
pub fn plan_root(root: &Path, options: &ScanOptions) -> Result<RootPlan> {
    if !root.exists() {
        return Err(TreelocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TreelocError::NotADirectory(root.to_path_buf()));
    }

    let mut plan = RootPlan::default();

    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %root.display(), error = %e, "skipping unreadable root entry");
                continue;
            }
        };
        let path = entry.path();

        let is_dir = if options.follow_links {
            path.is_dir()
        } else {
            entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
        };
        let is_file = if options.follow_links {
            path.is_file()
        } else {
            entry.file_type().map(|t| t.is_file()).unwrap_or(false)
        };

        if is_file {
            if admits(root, &path, &options.filter) {
                plan.files.push(path);
            }
        } else if is_dir && !should_skip_directory(&path) {
            let name = entry.file_name().to_string_lossy().into_owned();
            plan.buckets.push((BucketKey::Directory(name), path));
        }
    }

    plan.files.sort();
    plan.buckets.sort();

    Ok(plan)
}

/// Walk one bucket directory depth-first and return its owned stats.
///
/// Skipped directories are pruned before descent, so nothing below a
/// `node_modules` is ever listed.
pub fn walk_bucket(root: &Path, dir: &Path, options: &ScanOptions) -> BucketStats {
    let mut stats = BucketStats::new();

    let walker = WalkDir::new(dir)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_entry(|e| {
            // The bucket directory itself was already vetted by the root pass
            e.depth() == 0 || !e.file_type().is_dir() || !should_skip_directory(e.path())
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let err = entry_error(e, dir);
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_file() && admits(root, entry.path(), &options.filter) {
            if let Some((classification, extension)) = classify_entry(entry.path()) {
                stats.add_file(classification, &extension);
            }
        }
    }

    debug!(dir = %dir.display(), files = stats.files, lines = stats.lines, "bucket walked");
    stats
}

/// Fixed policy first, then the optional glob narrowing on the root-relative path.
fn admits(root: &Path, path: &Path, filter: &FilterConfig) -> bool {
    if !is_code_file(path) {
        return false;
    }
    if filter.is_empty() {
        return true;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    filter.matches(relative)
}

/// Name the failure kind of a traversal error: directories (including
/// symlink loops) are `DirectoryRead`, anything else is `FileRead`.
fn entry_error(err: walkdir::Error, bucket_dir: &Path) -> TreelocError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| bucket_dir.to_path_buf());

    if err.loop_ancestor().is_some() || path.is_dir() {
        return TreelocError::DirectoryRead {
            message: err.to_string(),
            path,
        };
    }

    let message = err.to_string();
    match err.into_io_error() {
        Some(source) => TreelocError::FileRead { path, source },
        None => TreelocError::DirectoryRead { path, message },
    }
}

/// Classify one admitted file. Read failures count as an empty file.
fn classify_entry(path: &Path) -> Option<(FileClassification, String)> {
    let extension = extension_key(path)?;
    let classification = classify_file(path).unwrap_or_else(|err| {
        warn!(error = %err, "counting unreadable file with zero lines");
        FileClassification::new()
    });
    Some((classification, extension))
}
