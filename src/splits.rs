//! Deterministic document-level split assignment.
//!
//! Every document is mapped to exactly one split by a stable hash of
//! `(doc_id, seed)` projected onto the configured ratios. Assignment is
//! a pure function of its inputs: no row-level randomness, so sentences
//! from one document can never leak across splits and re-runs are
//! reproducible.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::splits::{DEV_FILENAME, TEST_FILENAME, TRAIN_FILENAME};
use crate::errors::DatasetError;
use crate::types::DocId;

/// Logical dataset partitions of the evaluation output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SplitLabel {
    /// Training split.
    Train,
    /// Development split.
    Dev,
    /// Held-out test split.
    Test,
}

/// All split labels in output order.
pub const ALL_SPLITS: [SplitLabel; 3] = [SplitLabel::Train, SplitLabel::Dev, SplitLabel::Test];

impl SplitLabel {
    /// Output file name for this split.
    pub fn filename(self) -> &'static str {
        match self {
            SplitLabel::Train => TRAIN_FILENAME,
            SplitLabel::Dev => DEV_FILENAME,
            SplitLabel::Test => TEST_FILENAME,
        }
    }
}

/// Ratio configuration for train/dev/test assignment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SplitRatios {
    /// Fraction of documents assigned to train.
    pub train: f32,
    /// Fraction of documents assigned to dev.
    pub dev: f32,
    /// Fraction of documents assigned to test.
    pub test: f32,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            dev: 0.1,
            test: 0.1,
        }
    }
}

impl SplitRatios {
    /// Validate that ratios sum to `1.0` (within epsilon).
    pub fn normalized(self) -> Result<Self, DatasetError> {
        let sum = self.train + self.dev + self.test;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(DatasetError::Configuration(
                "split ratios must sum to 1.0".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Deterministic split assigner keyed on document identity.
#[derive(Clone, Copy, Debug)]
pub struct DocumentSplitter {
    ratios: SplitRatios,
    seed: u64,
}

impl DocumentSplitter {
    /// Create a splitter with validated `ratios` and a fixed `seed`.
    pub fn new(ratios: SplitRatios, seed: u64) -> Result<Self, DatasetError> {
        Ok(Self {
            ratios: ratios.normalized()?,
            seed,
        })
    }

    /// Configured split ratios.
    pub fn ratios(&self) -> SplitRatios {
        self.ratios
    }

    /// Split label for `doc_id`, a pure function of `(doc_id, seed, ratios)`.
    pub fn label_for(&self, doc_id: &DocId) -> SplitLabel {
        let mut hasher = DefaultHasher::new();
        doc_id.hash(&mut hasher);
        self.seed.hash(&mut hasher);
        let value = hasher.finish() as f64 / u64::MAX as f64;
        let train_cut = self.ratios.train as f64;
        let dev_cut = train_cut + self.ratios.dev as f64;
        if value < train_cut {
            SplitLabel::Train
        } else if value < dev_cut {
            SplitLabel::Dev
        } else {
            SplitLabel::Test
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_reject_non_unit_sum() {
        let invalid = SplitRatios {
            train: 0.6,
            dev: 0.3,
            test: 0.3,
        };
        let err = DocumentSplitter::new(invalid, 1).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Configuration(ref msg) if msg.contains("sum to 1.0")
        ));
    }

    #[test]
    fn zero_test_ratio_never_assigns_test_labels() {
        let ratios = SplitRatios {
            train: 0.5,
            dev: 0.5,
            test: 0.0,
        };
        let splitter = DocumentSplitter::new(ratios, 7).unwrap();

        let mut saw_train = false;
        let mut saw_dev = false;
        for idx in 0..20_000 {
            let doc_id = format!("doc_{idx}");
            let label = splitter.label_for(&doc_id);
            assert_ne!(label, SplitLabel::Test);
            saw_train |= label == SplitLabel::Train;
            saw_dev |= label == SplitLabel::Dev;
            if saw_train && saw_dev {
                break;
            }
        }

        assert!(saw_train);
        assert!(saw_dev);
    }

    #[test]
    fn assignment_is_stable_across_splitter_instances() {
        let first = DocumentSplitter::new(SplitRatios::default(), 42).unwrap();
        let second = DocumentSplitter::new(SplitRatios::default(), 42).unwrap();
        for idx in 0..100 {
            let doc_id = format!("{idx:08}");
            assert_eq!(first.label_for(&doc_id), second.label_for(&doc_id));
        }
    }

    #[test]
    fn different_seeds_shuffle_assignments() {
        let first = DocumentSplitter::new(SplitRatios::default(), 1).unwrap();
        let second = DocumentSplitter::new(SplitRatios::default(), 2).unwrap();
        let moved = (0..1_000)
            .map(|idx| format!("{idx:08}"))
            .filter(|doc_id| first.label_for(doc_id) != second.label_for(doc_id))
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn filenames_follow_output_order() {
        let names: Vec<&str> = ALL_SPLITS.iter().map(|split| split.filename()).collect();
        assert_eq!(names, vec!["train.jsonl", "dev.jsonl", "test.jsonl"]);
    }
}
