// Ad-hoc lookup for a single description, without an item file.
//
// The term space is fitted over the text plus both reference tables, the
// same way a one-row item file would be, and the best few candidates from
// each reference set are reported with their scores.

use anyhow::Result;
use serde::Serialize;

use super::References;
use crate::catalog::table::Table;
use crate::catalog::{CATEGORY_ID_COLUMN, CATEGORY_PATH_COLUMN};
use crate::matching::{Classifier, Match};
use crate::text::normalize::normalize;

/// One ranked reference row with its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Row index in the reference table
    pub index: usize,
    pub score: f64,
    pub label: String,
    /// Category id (categories only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Ranked candidates for one description.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub input: String,
    pub normalized: String,
    /// Whether the text has no term in the fitted vocabulary
    pub zero_vector: bool,
    pub categories: Vec<Candidate>,
    pub product_types: Vec<Candidate>,
}

/// Rank reference rows for `text`, keeping the `top` best of each set.
pub fn explain(text: &str, references: &References, top: usize) -> Result<Explanation> {
    let categories = &references.categories;
    let product_types = &references.product_types;
    let path_col = categories.require_column(CATEGORY_PATH_COLUMN)?;
    let id_col = categories.require_column(CATEGORY_ID_COLUMN)?;

    let normalized = normalize(text);
    let category_texts: Vec<String> = categories
        .table
        .joined_rows(" ")
        .iter()
        .map(|row| normalize(row))
        .collect();
    let product_type_texts: Vec<String> = product_types
        .table
        .column(0)
        .into_iter()
        .map(normalize)
        .collect();

    let classifier = Classifier::fit(
        std::slice::from_ref(&normalized),
        &category_texts,
        &product_type_texts,
    );
    let zero_vector = classifier.vectorize(&normalized).is_zero();
    let ranked = classifier.candidates(&normalized, top);

    let label = |m: &Match, col: usize, table: &Table| {
        table.cell(m.index, col).unwrap_or_default().to_string()
    };

    Ok(Explanation {
        input: text.to_string(),
        normalized,
        zero_vector,
        categories: ranked
            .categories
            .iter()
            .map(|m| Candidate {
                index: m.index,
                score: m.score,
                label: label(m, path_col, &categories.table),
                id: Some(label(m, id_col, &categories.table)),
            })
            .collect(),
        product_types: ranked
            .product_types
            .iter()
            .map(|m| Candidate {
                index: m.index,
                score: m.score,
                label: label(m, 0, &product_types.table),
                id: None,
            })
            .collect(),
    })
}
