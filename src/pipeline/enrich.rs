// Enrichment pipeline: normalize, fit, resolve, append columns, write.
//
// Everything runs in memory. The output file is only touched once every
// item has been resolved, so a failure anywhere leaves no output behind.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use super::CatalogInputs;
use crate::catalog::table::Table;
use crate::catalog::write::save_table;
use crate::catalog::{
    CATEGORY_ID_COLUMN, CATEGORY_PATH_COLUMN, ITEM_DESCRIPTION_COLUMN, OUTPUT_CATEGORY_COLUMN,
    OUTPUT_CATEGORY_ID_COLUMN, OUTPUT_PRODUCT_TYPE_COLUMN,
};
use crate::config::Config;
use crate::matching::Classifier;
use crate::text::normalize::normalize;

/// Counts describing one enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichSummary {
    /// Item rows written to the output
    pub items: usize,
    /// Malformed item rows dropped on load
    pub skipped_items: usize,
    pub categories: usize,
    pub product_types: usize,
    /// Dimensions of the fitted term space
    pub vocabulary_size: usize,
    /// Items with no known terms, resolved to the first reference rows
    pub zero_vector_items: usize,
}

/// The item table with enrichment columns added.
#[derive(Debug, Clone)]
pub struct EnrichedCatalog {
    pub table: Table,
    pub summary: EnrichSummary,
}

/// Resolve every item against both reference sets.
///
/// The description column is rewritten with its normalized text, and the
/// category path, category id, and product type are appended (or written
/// over same-named existing columns).
pub fn enrich(inputs: CatalogInputs, show_progress: bool) -> Result<EnrichedCatalog> {
    let CatalogInputs { items, references } = inputs;
    let description_col = items.require_column(ITEM_DESCRIPTION_COLUMN)?;
    let path_col = references.categories.require_column(CATEGORY_PATH_COLUMN)?;
    let id_col = references.categories.require_column(CATEGORY_ID_COLUMN)?;

    let mut table = items.table;
    table.map_column(description_col, normalize);

    let item_texts: Vec<String> = table
        .column(description_col)
        .into_iter()
        .map(normalize)
        .collect();
    let category_texts: Vec<String> = references
        .categories
        .table
        .joined_rows(" ")
        .iter()
        .map(|row| normalize(row))
        .collect();
    let product_type_texts: Vec<String> = references
        .product_types
        .table
        .column(0)
        .into_iter()
        .map(normalize)
        .collect();

    let classifier = Classifier::fit(&item_texts, &category_texts, &product_type_texts);
    let vocabulary_size = classifier.model().vocabulary_size();
    if vocabulary_size == 0 {
        warn!("Fitted vocabulary is empty; every item resolves to the first reference rows");
    }
    info!(
        items = item_texts.len(),
        categories = classifier.category_count(),
        product_types = classifier.product_type_count(),
        vocabulary = vocabulary_size,
        "Fitted shared term space"
    );

    let pb = if show_progress {
        ProgressBar::new(item_texts.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar().template("  Matching [{bar:30}] {pos}/{len} ({eta})")?,
    );

    let mut category_paths = Vec::with_capacity(item_texts.len());
    let mut category_ids = Vec::with_capacity(item_texts.len());
    let mut product_types = Vec::with_capacity(item_texts.len());
    let mut zero_vector_items = 0;

    for text in &item_texts {
        let vector = classifier.vectorize(text);
        if vector.is_zero() {
            zero_vector_items += 1;
        }
        let Some(resolved) = classifier.classify(&vector) else {
            anyhow::bail!("Reference sets are empty; nothing to match against");
        };

        let categories = &references.categories.table;
        category_paths.push(cell(categories, resolved.category.index, path_col));
        category_ids.push(cell(categories, resolved.category.index, id_col));
        product_types.push(cell(
            &references.product_types.table,
            resolved.product_type.index,
            0,
        ));
        pb.inc(1);
    }
    pb.finish_and_clear();

    if zero_vector_items > 0 {
        warn!(
            count = zero_vector_items,
            "Items without any known terms were assigned the first reference rows"
        );
    }

    table.set_column(OUTPUT_CATEGORY_COLUMN, category_paths)?;
    table.set_column(OUTPUT_CATEGORY_ID_COLUMN, category_ids)?;
    table.set_column(OUTPUT_PRODUCT_TYPE_COLUMN, product_types)?;

    let summary = EnrichSummary {
        items: table.len(),
        skipped_items: items.skipped,
        categories: references.categories.table.len(),
        product_types: references.product_types.table.len(),
        vocabulary_size,
        zero_vector_items,
    };

    Ok(EnrichedCatalog { table, summary })
}

fn cell(table: &Table, row: usize, column: usize) -> String {
    table.cell(row, column).unwrap_or_default().to_string()
}

/// Load, enrich, and write according to `config`.
pub fn run(config: &Config, show_progress: bool) -> Result<EnrichSummary> {
    config.require_distinct_output()?;
    let inputs = CatalogInputs::load(config)?;
    let enriched = enrich(inputs, show_progress)?;
    save_table(&config.output_path, &enriched.table)?;
    info!(
        output = %config.output_path.display(),
        items = enriched.summary.items,
        "Enrichment complete"
    );
    Ok(enriched.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load::{read_table, BadLines};
    use crate::pipeline::References;

    fn inputs(items: &str) -> CatalogInputs {
        let load = |body: &str, name: &str| {
            read_table(body.as_bytes(), BadLines::Error, name).unwrap()
        };
        let references = References::new(
            load(
                "Category path;Category id;Keywords\nКухни;1;кухня\nДиваны;2;диван\n",
                "categories.csv",
            ),
            load("Тип\nКухня\nДиван\n", "types.csv"),
        )
        .unwrap();
        CatalogInputs::new(load(items, "items.csv"), references).unwrap()
    }

    #[test]
    fn test_enrich_in_memory() {
        let items = inputs("Наименование;Описание\nX;Диван-кровать <b>new</b>!!\n");
        let enriched = enrich(items, false).unwrap();
        assert_eq!(
            enriched.table.rows()[0],
            vec!["X", "Диван new", "Диваны", "2", "Диван"]
        );
        assert_eq!(enriched.summary.zero_vector_items, 0);
    }

    #[test]
    fn test_empty_item_table() {
        let enriched = enrich(inputs("Наименование;Описание\n"), false).unwrap();
        assert!(enriched.table.is_empty());
        assert_eq!(enriched.table.headers().len(), 5);
        assert_eq!(enriched.summary.items, 0);
    }
}
