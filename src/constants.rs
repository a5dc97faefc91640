/// Column names required of the input and intermediate tables.
pub mod columns {
    /// Document identifier column.
    pub const DOC_ID: &str = "doc_id";
    /// Stock ticker column.
    pub const STOCK_CODE: &str = "stock_code";
    /// Sentence index column.
    pub const SENTENCE_ID: &str = "sentence_id";
    /// Sentence text column.
    pub const SENTENCE: &str = "sentence";
    /// Causality label column.
    pub const LABEL: &str = "label";
    /// Importance flag column.
    pub const PRIME: &str = "prime";
    /// Effect-direction column.
    pub const POLARITY: &str = "polarity";

    /// Columns that must be present in the annotation table.
    pub const ANNOTATION_REQUIRED: &[&str] =
        &[DOC_ID, STOCK_CODE, SENTENCE_ID, LABEL, PRIME, POLARITY];
    /// Columns that must be present in the master-data table.
    pub const MASTER_REQUIRED: &[&str] = &[DOC_ID, STOCK_CODE, SENTENCE_ID, SENTENCE];
    /// Columns that must be present in the annotated-data table.
    pub const ANNOTATED_REQUIRED: &[&str] =
        &[DOC_ID, STOCK_CODE, SENTENCE_ID, LABEL, PRIME, POLARITY, SENTENCE];
}

/// Constants used by split derivation and output naming.
pub mod splits {
    /// Output file name for the train split.
    pub const TRAIN_FILENAME: &str = "train.jsonl";
    /// Output file name for the dev split.
    pub const DEV_FILENAME: &str = "dev.jsonl";
    /// Output file name for the test split.
    pub const TEST_FILENAME: &str = "test.jsonl";
    /// Default seed for deterministic split allocation.
    pub const DEFAULT_SEED: u64 = 42;
    /// Default split-ratio argument accepted by the CLI.
    pub const DEFAULT_RATIOS_ARG: &str = "0.8,0.1,0.1";
}

/// Label vocabulary shared by normalization and validation.
pub mod labels {
    /// Canonical causal ("positive example") label.
    pub const CAUSAL_POSITIVE: &str = "正例";
    /// Canonical non-causal ("negative example") label.
    pub const CAUSAL_NEGATIVE: &str = "負例";
    /// Raw annotator category: plain performance statement.
    pub const RAW_PERFORMANCE: &str = "業績";
    /// Raw annotator category: explicitly stated performance driver.
    pub const RAW_EXPLICIT_CAUSE: &str = "明示的な業績要因";
    /// Raw annotator category: implied performance driver.
    pub const RAW_IMPLICIT_CAUSE: &str = "暗黙的な業績要因";
    /// `target` values marking a row as excluded from evaluation output.
    /// The literal `target` entries are repeated header lines left over
    /// from concatenated annotator sheets.
    pub const EXCLUDED_TARGETS: &[&str] = &["0", "target"];
    /// Master `ignore` value marking a document as dropped upstream.
    pub const IGNORED_DOC: &str = "1";
}
