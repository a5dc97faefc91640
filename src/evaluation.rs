//! Dataset splitter: normalizes annotated rows and writes JSONL splits.
//!
//! Exclusion rule: annotated rows whose `target` value is `0` or the
//! literal `target` (repeated header lines from concatenated annotator
//! sheets) are skipped. Every other input row lands in exactly one
//! split file; the partition is a disjoint cover.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::constants::columns;
use crate::data::{AnnotatedRow, EvaluationRecord, MasterRow};
use crate::errors::DatasetError;
use crate::labels::{causality_label, is_excluded_target, polarity_label, prime_label};
use crate::merge::load_master;
use crate::metrics::split_composition;
use crate::splits::{ALL_SPLITS, DocumentSplitter, SplitLabel};
use crate::table::{read_tsv, write_jsonl};
use crate::types::{DocId, FacetValue};

/// Document-level master metadata used for validation and summaries.
struct DocProfile {
    polarity: FacetValue,
    industry: FacetValue,
}

/// First master occurrence per document wins; the document-level fields
/// are repeated on every sentence row.
fn doc_profiles(master: &[MasterRow]) -> HashMap<DocId, DocProfile> {
    let mut profiles = HashMap::new();
    for row in master {
        profiles.entry(row.doc_id.clone()).or_insert_with(|| DocProfile {
            polarity: direction_facet(&row.polarity),
            industry: row.industry.clone(),
        });
    }
    profiles
}

/// Reduce a master polarity cell (for example `増収`) to its leading
/// direction character.
fn direction_facet(polarity: &str) -> FacetValue {
    polarity.chars().next().map(String::from).unwrap_or_default()
}

fn to_record(
    path: &Path,
    row_idx: usize,
    row: &AnnotatedRow,
) -> Result<EvaluationRecord, DatasetError> {
    let label = causality_label(&row.label).ok_or_else(|| {
        DatasetError::malformed(
            path,
            format!("row {}: unknown causality label '{}'", row_idx + 1, row.label),
        )
    })?;
    let prime = prime_label(&row.prime).ok_or_else(|| {
        DatasetError::malformed(
            path,
            format!("row {}: unknown prime flag '{}'", row_idx + 1, row.prime),
        )
    })?;
    let polarity = polarity_label(&row.polarity).ok_or_else(|| {
        DatasetError::malformed(
            path,
            format!("row {}: unknown polarity mark '{}'", row_idx + 1, row.polarity),
        )
    })?;

    Ok(EvaluationRecord {
        doc_id: row.doc_id.clone(),
        stock_code: row.stock_code.clone(),
        sentence: crate::utils::fullwidth_markup(&row.sentence),
        label: label.to_string(),
        prime: prime.to_string(),
        polarity: polarity.to_string(),
    })
}

/// Build the evaluation dataset: read the annotated table, normalize
/// labels, partition by document, and write one JSONL file per split.
/// Returns the number of records written per split.
pub fn build_evaluation_data(
    annotated_path: &Path,
    master_path: &Path,
    out_dir: &Path,
    splitter: &DocumentSplitter,
) -> Result<BTreeMap<SplitLabel, usize>, DatasetError> {
    let annotated: Vec<AnnotatedRow> = read_tsv(annotated_path, columns::ANNOTATED_REQUIRED)?;
    let master = load_master(master_path)?;
    let profiles = doc_profiles(&master);

    let mut buckets: BTreeMap<SplitLabel, Vec<EvaluationRecord>> = BTreeMap::new();
    let mut polarity_observations: Vec<(SplitLabel, FacetValue)> = Vec::new();
    let mut industry_observations: Vec<(SplitLabel, FacetValue)> = Vec::new();
    for (idx, row) in annotated.iter().enumerate() {
        if is_excluded_target(&row.target) {
            continue;
        }
        let profile = profiles.get(&row.doc_id).ok_or_else(|| {
            DatasetError::missing_key(
                annotated_path,
                format!("doc_id={} is not in the master data", row.doc_id),
            )
        })?;

        let record = to_record(annotated_path, idx, row)?;
        let split = splitter.label_for(&row.doc_id);
        polarity_observations.push((split, profile.polarity.clone()));
        industry_observations.push((split, profile.industry.clone()));
        buckets.entry(split).or_default().push(record);
    }

    fs::create_dir_all(out_dir).map_err(|err| DatasetError::output_path(out_dir, err))?;
    let empty: Vec<EvaluationRecord> = Vec::new();
    let mut written = BTreeMap::new();
    for split in ALL_SPLITS {
        let records = buckets.get(&split).unwrap_or(&empty);
        write_jsonl(&out_dir.join(split.filename()), records)?;
        written.insert(split, records.len());
    }

    for summary in split_composition(&polarity_observations) {
        info!(
            facet = "polarity",
            split = ?summary.split,
            total = summary.total,
            shares = ?summary.facets,
            "split composition"
        );
    }
    for summary in split_composition(&industry_observations) {
        info!(
            facet = "industry",
            split = ?summary.split,
            total = summary.total,
            shares = ?summary.facets,
            "split composition"
        );
    }
    info!(out = %out_dir.display(), "evaluation data written");
    Ok(written)
}
