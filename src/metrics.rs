use std::collections::BTreeMap;

use crate::splits::{ALL_SPLITS, SplitLabel};
use crate::types::FacetValue;

/// Sentence count for one facet value within a split.
#[derive(Clone, Debug, PartialEq)]
pub struct FacetShare {
    /// Facet value (for example the document polarity `増`).
    pub value: FacetValue,
    /// Sentences in the split whose document has this facet value.
    pub count: usize,
    /// Fraction of the split's sentences with this facet value.
    pub share: f64,
}

/// Composition of one split broken down by a document-level facet.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitComposition {
    /// Split this summary describes.
    pub split: SplitLabel,
    /// Total sentences assigned to the split.
    pub total: usize,
    /// Per-facet counts, ordered by facet value.
    pub facets: Vec<FacetShare>,
}

/// Summarize `(split, facet)` observations per split, in output order.
/// Splits with no observations are omitted.
pub fn split_composition(observations: &[(SplitLabel, FacetValue)]) -> Vec<SplitComposition> {
    let mut counts: BTreeMap<SplitLabel, BTreeMap<FacetValue, usize>> = BTreeMap::new();
    for (split, facet) in observations {
        *counts
            .entry(*split)
            .or_default()
            .entry(facet.clone())
            .or_default() += 1;
    }

    ALL_SPLITS
        .iter()
        .filter_map(|split| {
            let facets = counts.get(split)?;
            let total: usize = facets.values().sum();
            let facets = facets
                .iter()
                .map(|(value, count)| FacetShare {
                    value: value.clone(),
                    count: *count,
                    share: *count as f64 / total as f64,
                })
                .collect();
            Some(SplitComposition {
                split: *split,
                total,
                facets,
            })
        })
        .collect()
}
