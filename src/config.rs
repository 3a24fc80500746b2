use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default item catalog file name.
pub const DEFAULT_ITEMS_PATH: &str = "Black Cat.csv";
/// Default category reference file name.
pub const DEFAULT_CATEGORIES_PATH: &str = "categories.csv";
/// Default product-type reference file name.
pub const DEFAULT_PRODUCT_TYPES_PATH: &str = "Тип товара.csv";
/// Default enriched output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "Black Cat with Categories and Product Types.csv";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; every path has a default
/// so a bare `catmatch enrich` works from a directory holding the exports.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub items_path: PathBuf,
    pub categories_path: PathBuf,
    pub product_types_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_path: PathBuf::from(DEFAULT_ITEMS_PATH),
            categories_path: PathBuf::from(DEFAULT_CATEGORIES_PATH),
            product_types_path: PathBuf::from(DEFAULT_PRODUCT_TYPES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// default file names.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        let path_var = |name: &str, fallback: PathBuf| {
            env::var(name).map(PathBuf::from).unwrap_or(fallback)
        };

        Ok(Self {
            items_path: path_var("CATMATCH_ITEMS_PATH", defaults.items_path),
            categories_path: path_var("CATMATCH_CATEGORIES_PATH", defaults.categories_path),
            product_types_path: path_var(
                "CATMATCH_PRODUCT_TYPES_PATH",
                defaults.product_types_path,
            ),
            output_path: path_var("CATMATCH_OUTPUT_PATH", defaults.output_path),
        })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        items: Option<PathBuf>,
        categories: Option<PathBuf>,
        product_types: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = items {
            self.items_path = path;
        }
        if let Some(path) = categories {
            self.categories_path = path;
        }
        if let Some(path) = product_types {
            self.product_types_path = path;
        }
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    /// Refuse to run when the output would overwrite one of the inputs.
    pub fn require_distinct_output(&self) -> Result<()> {
        let inputs = [
            &self.items_path,
            &self.categories_path,
            &self.product_types_path,
        ];
        if inputs.iter().any(|p| **p == self.output_path) {
            anyhow::bail!(
                "Output path {} is also an input file.\n\
                 Set CATMATCH_OUTPUT_PATH or pass --output to write elsewhere.",
                self.output_path.display()
            );
        }
        Ok(())
    }
}
