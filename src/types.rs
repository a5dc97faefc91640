/// Unique identifier of one financial-results report.
/// Example: `00000009`
pub type DocId = String;
/// Exchange ticker code of the reporting company.
/// Example: `3777`
pub type StockCode = String;
/// Sentence index within a document, kept as text exactly as annotated.
/// Example: `12`
pub type SentenceId = String;
/// Sentence text extracted from a report.
/// Example: `売上は増加した`
pub type Sentence = String;
/// Raw or canonical causality label value.
/// Examples: `明示的な業績要因`, `正例`
pub type LabelValue = String;
/// Industry sector name used for split composition summaries.
/// Example: `情報・通信業`
pub type IndustryName = String;
/// Document-level facet value used in composition summaries.
/// Examples: `増`, `減`
pub type FacetValue = String;
