//! Bucket-keyed accumulation of file results.
//!
//! Buckets come into existence on first use with all-zero counters. Nothing
//! is ever subtracted, so `record` calls commute and partial aggregators can
//! be merged in any order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::stats::{AnalysisResult, BucketKey, BucketStats, FileClassification};

/// Mutable accumulator for one traversal run.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    buckets: BTreeMap<BucketKey, BucketStats>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a bucket, creating it with zero counters if it doesn't exist yet.
    pub fn bucket_mut(&mut self, key: BucketKey) -> &mut BucketStats {
        self.buckets.entry(key).or_default()
    }

    /// Attribute one classified file to `key`.
    pub fn record(&mut self, key: BucketKey, classification: FileClassification, extension: &str) {
        self.bucket_mut(key).add_file(classification, extension);
    }

    /// Fold a bucket accumulated elsewhere into this aggregator.
    pub fn absorb(&mut self, key: BucketKey, stats: BucketStats) {
        *self.bucket_mut(key) += stats;
    }

    /// Fold another aggregator into this one.
    pub fn merge(&mut self, other: Aggregator) {
        for (key, stats) in other.buckets {
            self.absorb(key, stats);
        }
    }

    /// Number of buckets created so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Hand over the accumulated buckets.
    pub fn finalize(self, root: PathBuf) -> AnalysisResult {
        AnalysisResult {
            root,
            buckets: self.buckets,
        }
    }
}
