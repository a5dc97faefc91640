#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runners shared by the dataset binaries.
pub mod apps;
/// Centralized constants for columns, splits, and label vocabulary.
pub mod constants;
/// Record types flowing through the pipeline.
pub mod data;
/// Dataset splitter producing the evaluation JSONL files.
pub mod evaluation;
/// Label vocabulary normalization.
pub mod labels;
/// Annotation merger joining annotation rows with master data.
pub mod merge;
/// Split composition summaries.
pub mod metrics;
/// Deterministic document-level split assignment.
pub mod splits;
/// Delimited-table readers and atomic writers.
pub mod table;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;

mod errors;

pub use data::{AnnotatedRow, AnnotationRow, EvaluationRecord, MasterRow};
pub use errors::DatasetError;
pub use evaluation::build_evaluation_data;
pub use merge::{build_annotated_data, join_annotations, load_master};
pub use splits::{ALL_SPLITS, DocumentSplitter, SplitLabel, SplitRatios};
pub use types::{
    DocId, FacetValue, IndustryName, LabelValue, Sentence, SentenceId, StockCode,
};
