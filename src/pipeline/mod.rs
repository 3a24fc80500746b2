// Batch pipelines — loading the catalog files and running enrichment.

pub mod enrich;
pub mod explain;

use anyhow::Result;

use crate::catalog::load::{load_table, BadLines, LoadedTable};
use crate::catalog::{
    CATEGORY_ID_COLUMN, CATEGORY_PATH_COLUMN, ITEM_DESCRIPTION_COLUMN, ITEM_NAME_COLUMN,
    PRODUCT_TYPE_COLUMN,
};
use crate::config::Config;

/// The category and product-type reference tables, validated.
#[derive(Debug, Clone)]
pub struct References {
    pub categories: LoadedTable,
    pub product_types: LoadedTable,
}

impl References {
    /// Check required columns and rename the product-type column.
    ///
    /// Both tables must have at least one row; an empty reference set has
    /// no nearest row to return.
    pub fn new(categories: LoadedTable, mut product_types: LoadedTable) -> Result<Self> {
        categories.require_column(CATEGORY_PATH_COLUMN)?;
        categories.require_column(CATEGORY_ID_COLUMN)?;

        let width = product_types.table.headers().len();
        if width != 1 {
            anyhow::bail!(
                "{} must have exactly one column, found {width}",
                product_types.source
            );
        }
        product_types.table.rename_column(0, PRODUCT_TYPE_COLUMN);

        for reference in [&categories, &product_types] {
            if reference.table.is_empty() {
                anyhow::bail!("{} contains no reference rows", reference.source);
            }
        }

        Ok(Self {
            categories,
            product_types,
        })
    }

    /// Load both reference files with strict row parsing.
    pub fn load(config: &Config) -> Result<Self> {
        let categories = load_table(&config.categories_path, BadLines::Error)?;
        let product_types = load_table(&config.product_types_path, BadLines::Error)?;
        Self::new(categories, product_types)
    }
}

/// Everything the enrichment pass needs, loaded and validated.
#[derive(Debug, Clone)]
pub struct CatalogInputs {
    pub items: LoadedTable,
    pub references: References,
}

impl CatalogInputs {
    /// Validate the item table against the required columns.
    pub fn new(items: LoadedTable, references: References) -> Result<Self> {
        items.require_column(ITEM_NAME_COLUMN)?;
        items.require_column(ITEM_DESCRIPTION_COLUMN)?;
        Ok(Self { items, references })
    }

    /// Load all three files. Malformed item rows are skipped; malformed
    /// reference rows abort the run.
    pub fn load(config: &Config) -> Result<Self> {
        let items = load_table(&config.items_path, BadLines::Skip)?;
        let references = References::load(config)?;
        Self::new(items, references)
    }
}
