//! Annotation merger: joins annotation rows with master sentence text.
//!
//! Join policy: every annotation row must match exactly one master row
//! on `(doc_id, stock_code, sentence_id)`. An unmatched row aborts the
//! run with `MissingJoinKey` and no output file is produced; unmatched
//! rows are a data-integrity problem, never silently dropped.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::constants::{columns, labels};
use crate::data::{AnnotatedRow, AnnotationRow, MasterRow};
use crate::errors::DatasetError;
use crate::table::{read_csv, read_tsv, write_delimited};

/// Read the master-data table, dropping documents flagged `ignore`.
pub fn load_master(path: &Path) -> Result<Vec<MasterRow>, DatasetError> {
    let rows: Vec<MasterRow> = read_csv(path, columns::MASTER_REQUIRED)?;
    let total = rows.len();
    let kept: Vec<MasterRow> = rows
        .into_iter()
        .filter(|row| row.ignore != labels::IGNORED_DOC)
        .collect();
    if kept.len() < total {
        debug!(
            dropped = total - kept.len(),
            "master rows excluded by ignore flag"
        );
    }
    Ok(kept)
}

/// Join each annotation row with its master sentence, preserving the
/// annotation table's row order.
///
/// Every annotation row must match exactly one master row, so a master
/// table that repeats a join key is malformed rather than last-win.
pub fn join_annotations(
    annotation_path: &Path,
    master_path: &Path,
    annotation: &[AnnotationRow],
    master: &[MasterRow],
) -> Result<Vec<AnnotatedRow>, DatasetError> {
    let mut sentences: HashMap<(&str, &str, &str), &str> = HashMap::with_capacity(master.len());
    for row in master {
        let key = (
            row.doc_id.as_str(),
            row.stock_code.as_str(),
            row.sentence_id.as_str(),
        );
        if sentences.insert(key, row.sentence.as_str()).is_some() {
            return Err(DatasetError::malformed(
                master_path,
                format!(
                    "duplicate master row for (doc_id={}, stock_code={}, sentence_id={})",
                    row.doc_id, row.stock_code, row.sentence_id
                ),
            ));
        }
    }

    annotation
        .iter()
        .map(|row| {
            let key = (
                row.doc_id.as_str(),
                row.stock_code.as_str(),
                row.sentence_id.as_str(),
            );
            let sentence = sentences.get(&key).copied().ok_or_else(|| {
                DatasetError::missing_key(
                    annotation_path,
                    format!(
                        "(doc_id={}, stock_code={}, sentence_id={})",
                        row.doc_id, row.stock_code, row.sentence_id
                    ),
                )
            })?;
            Ok(AnnotatedRow {
                doc_id: row.doc_id.clone(),
                stock_code: row.stock_code.clone(),
                sentence_id: row.sentence_id.clone(),
                target: row.target.clone(),
                label: row.label.clone(),
                prime: row.prime.clone(),
                polarity: row.polarity.clone(),
                sentence: sentence.to_string(),
            })
        })
        .collect()
}

/// Build the annotated-data table: read both inputs, join, write.
/// Returns the number of rows written.
pub fn build_annotated_data(
    annotation_path: &Path,
    master_path: &Path,
    out_path: &Path,
) -> Result<usize, DatasetError> {
    let annotation: Vec<AnnotationRow> = read_tsv(annotation_path, columns::ANNOTATION_REQUIRED)?;
    require_join_keys(
        annotation_path,
        annotation
            .iter()
            .map(|row| (&row.doc_id, &row.stock_code, &row.sentence_id)),
    )?;

    let master = load_master(master_path)?;
    require_join_keys(
        master_path,
        master
            .iter()
            .map(|row| (&row.doc_id, &row.stock_code, &row.sentence_id)),
    )?;

    let merged = join_annotations(annotation_path, master_path, &annotation, &master)?;
    write_delimited(out_path, b'\t', &merged)?;
    info!(
        rows = merged.len(),
        out = %out_path.display(),
        "annotated data written"
    );
    Ok(merged.len())
}

/// Join keys must be present and non-empty in every row of both tables.
fn require_join_keys<'a>(
    path: &Path,
    keys: impl Iterator<Item = (&'a String, &'a String, &'a String)>,
) -> Result<(), DatasetError> {
    for (idx, (doc_id, stock_code, sentence_id)) in keys.enumerate() {
        if doc_id.is_empty() || stock_code.is_empty() || sentence_id.is_empty() {
            return Err(DatasetError::malformed(
                path,
                format!("row {} has an empty join key field", idx + 1),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation_row(doc_id: &str, sentence_id: &str, label: &str) -> AnnotationRow {
        AnnotationRow {
            doc_id: doc_id.to_string(),
            stock_code: "3777".to_string(),
            sentence_id: sentence_id.to_string(),
            target: String::new(),
            label: label.to_string(),
            prime: "1".to_string(),
            polarity: "+".to_string(),
        }
    }

    fn master_row(doc_id: &str, sentence_id: &str, sentence: &str) -> MasterRow {
        MasterRow {
            doc_id: doc_id.to_string(),
            stock_code: "3777".to_string(),
            sentence_id: sentence_id.to_string(),
            sentence: sentence.to_string(),
            industry: "情報・通信業".to_string(),
            polarity: "増収".to_string(),
            ignore: String::new(),
        }
    }

    #[test]
    fn join_attaches_master_sentence_text() {
        let annotation = vec![annotation_row("00000009", "0", "正例")];
        let master = vec![master_row("00000009", "0", "売上は増加した")];

        let merged = join_annotations(
            Path::new("annotation.tsv"),
            Path::new("master_data.csv"),
            &annotation,
            &master,
        )
        .unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].doc_id, "00000009");
        assert_eq!(merged[0].stock_code, "3777");
        assert_eq!(merged[0].sentence, "売上は増加した");
        assert_eq!(merged[0].label, "正例");
        assert_eq!(merged[0].prime, "1");
        assert_eq!(merged[0].polarity, "+");
    }

    #[test]
    fn join_preserves_annotation_row_order() {
        let annotation = vec![
            annotation_row("00000009", "1", "業績"),
            annotation_row("00000009", "0", "正例"),
        ];
        let master = vec![
            master_row("00000009", "0", "最初の文"),
            master_row("00000009", "1", "次の文"),
        ];

        let merged = join_annotations(
            Path::new("annotation.tsv"),
            Path::new("master_data.csv"),
            &annotation,
            &master,
        )
        .unwrap();
        assert_eq!(merged[0].sentence, "次の文");
        assert_eq!(merged[1].sentence, "最初の文");
    }

    #[test]
    fn unmatched_row_fails_with_missing_join_key() {
        let annotation = vec![annotation_row("00000009", "5", "正例")];
        let master = vec![master_row("00000009", "0", "売上は増加した")];

        let err = join_annotations(
            Path::new("annotation.tsv"),
            Path::new("master_data.csv"),
            &annotation,
            &master,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MissingJoinKey { key, .. } if key.contains("sentence_id=5")
        ));
    }

    #[test]
    fn duplicate_master_keys_are_malformed() {
        let annotation = vec![annotation_row("00000009", "0", "正例")];
        let master = vec![
            master_row("00000009", "0", "売上は増加した"),
            master_row("00000009", "0", "別の文"),
        ];

        let err = join_annotations(
            Path::new("annotation.tsv"),
            Path::new("master_data.csv"),
            &annotation,
            &master,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MalformedInput { path, reason }
                if path == "master_data.csv"
                    && reason.contains("duplicate master row")
                    && reason.contains("sentence_id=0")
        ));
    }

    #[test]
    fn empty_join_key_fields_are_malformed() {
        let mut row = annotation_row("00000009", "0", "正例");
        row.stock_code = String::new();
        let rows = [row];

        let err = require_join_keys(
            Path::new("annotation.tsv"),
            rows.iter()
                .map(|row| (&row.doc_id, &row.stock_code, &row.sentence_id)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::MalformedInput { reason, .. } if reason.contains("row 1")
        ));
    }
}
