use serde::{Deserialize, Serialize};

pub use crate::types::{DocId, IndustryName, LabelValue, Sentence, SentenceId, StockCode};

/// One hand-annotated sentence reference, as read from the annotation table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotationRow {
    /// Document this sentence belongs to.
    pub doc_id: DocId,
    /// Ticker of the reporting company.
    pub stock_code: StockCode,
    /// Sentence index within the document.
    pub sentence_id: SentenceId,
    /// Exclusion marker carried over from concatenated annotator sheets;
    /// empty when the column is absent.
    #[serde(default)]
    pub target: String,
    /// Causality category assigned by the annotators.
    pub label: LabelValue,
    /// Importance flag (`1`, `?`, or empty).
    pub prime: String,
    /// Effect-direction mark as written by the annotators.
    pub polarity: String,
}

/// Reference metadata for one sentence of one document, as read from
/// the master-data table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MasterRow {
    /// Document identifier.
    pub doc_id: DocId,
    /// Ticker of the reporting company.
    pub stock_code: StockCode,
    /// Sentence index within the document.
    pub sentence_id: SentenceId,
    /// Full sentence text extracted upstream.
    pub sentence: Sentence,
    /// Industry sector of the reporting company (document level).
    #[serde(default)]
    pub industry: IndustryName,
    /// Overall performance direction of the report (`増`.../`減`...).
    #[serde(default)]
    pub polarity: String,
    /// Upstream exclusion flag; `1` drops the whole document.
    #[serde(default)]
    pub ignore: String,
}

/// The join of an annotation row with its master sentence text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedRow {
    /// Document identifier.
    pub doc_id: DocId,
    /// Ticker of the reporting company.
    pub stock_code: StockCode,
    /// Sentence index within the document.
    pub sentence_id: SentenceId,
    /// Exclusion marker carried over from the annotation table.
    #[serde(default)]
    pub target: String,
    /// Causality category assigned by the annotators.
    pub label: LabelValue,
    /// Importance flag.
    pub prime: String,
    /// Effect-direction mark.
    pub polarity: String,
    /// Sentence text joined in from the master data.
    pub sentence: Sentence,
}

/// Final externally visible unit: one line of a split file.
///
/// Field order is fixed and part of the output format; all values are
/// strings with `label ∈ {正例, 負例}`, `prime ∈ {1, ?, empty}`, and
/// `polarity ∈ {+, -, ?, empty}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Document identifier.
    pub doc_id: DocId,
    /// Ticker of the reporting company.
    pub stock_code: StockCode,
    /// Normalized sentence text.
    pub sentence: Sentence,
    /// Canonical causality label.
    pub label: LabelValue,
    /// Importance flag.
    pub prime: String,
    /// Canonical effect direction.
    pub polarity: String,
}
