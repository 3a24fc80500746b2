use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use catmatch::catalog::load::{load_table, BadLines};
use catmatch::config::Config;
use catmatch::output::terminal;
use catmatch::pipeline::{enrich, explain, References};

/// catmatch: assign catalog items to their closest category and product type.
///
/// Descriptions are normalized, projected into a TF-IDF space shared with
/// the reference tables, and matched by cosine similarity.
#[derive(Parser)]
#[command(name = "catmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich the item catalog with category and product-type columns
    Enrich {
        /// Item catalog (default: CATMATCH_ITEMS_PATH or "Black Cat.csv")
        #[arg(long)]
        items: Option<PathBuf>,

        /// Category reference table
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Product-type reference table (single column)
        #[arg(long)]
        product_types: Option<PathBuf>,

        /// Where to write the enriched catalog
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the run summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the best category and product-type candidates for one description
    Explain {
        /// The description text to match
        text: String,

        /// Number of candidates to show per reference set (default: 5)
        #[arg(long, default_value = "5")]
        top: usize,

        /// Category reference table
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Product-type reference table (single column)
        #[arg(long)]
        product_types: Option<PathBuf>,

        /// Print candidates as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the columns of the three input files
    Columns,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catmatch=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Enrich {
            items,
            categories,
            product_types,
            output,
            json,
        } => {
            let config = Config::load()?.with_overrides(items, categories, product_types, output);
            info!(
                items = %config.items_path.display(),
                output = %config.output_path.display(),
                "Starting enrichment"
            );

            let show_progress = !json && std::io::stderr().is_terminal();
            let summary = enrich::run(&config, show_progress)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                terminal::display_summary(&summary, &config.output_path);
            }
        }

        Commands::Explain {
            text,
            top,
            categories,
            product_types,
            json,
        } => {
            let config = Config::load()?.with_overrides(None, categories, product_types, None);
            let references = References::load(&config)?;
            let explanation = explain::explain(&text, &references, top)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&explanation)?);
            } else {
                terminal::display_explanation(&explanation);
            }
        }

        Commands::Columns => {
            let config = Config::load()?;
            let items = load_table(&config.items_path, BadLines::Skip)?;
            let categories = load_table(&config.categories_path, BadLines::Error)?;
            let product_types = load_table(&config.product_types_path, BadLines::Error)?;
            terminal::display_columns(&[&items, &categories, &product_types]);
            println!(
                "{}",
                "The single product-type column is renamed to \"Product Type\" on load.".dimmed()
            );
        }
    }

    Ok(())
}
