// Colored terminal output for run summaries, explanations, and column lists.
//
// main.rs delegates all human-facing formatting here; tracing carries the
// structured log stream separately on stderr.

use std::path::Path;

use colored::Colorize;

use super::truncate_chars;
use crate::catalog::load::LoadedTable;
use crate::pipeline::enrich::EnrichSummary;
use crate::pipeline::explain::{Candidate, Explanation};

/// Widest label shown in candidate tables before truncation.
const LABEL_WIDTH: usize = 60;

/// Display the result of an enrichment run.
pub fn display_summary(summary: &EnrichSummary, output: &Path) {
    println!("\n{}", "=== Enrichment complete ===".bold());
    println!();
    println!("  Items written:     {}", summary.items);
    println!("  Categories:        {}", summary.categories);
    println!("  Product types:     {}", summary.product_types);
    println!("  Vocabulary terms:  {}", summary.vocabulary_size);

    if summary.skipped_items > 0 {
        println!(
            "  {} {} malformed item rows skipped",
            "!".yellow(),
            summary.skipped_items
        );
    }
    if summary.zero_vector_items > 0 {
        println!(
            "  {} {} items had no known terms and got the first category/type",
            "~".yellow(),
            summary.zero_vector_items
        );
    }

    println!();
    println!("  Output: {}", output.display().to_string().bold());
}

/// Display ranked candidates for one description.
pub fn display_explanation(explanation: &Explanation) {
    println!("\n{}", "=== Match candidates ===".bold());
    println!();
    println!("  Input:      {}", truncate_chars(&explanation.input, LABEL_WIDTH));
    println!(
        "  Normalized: {}",
        truncate_chars(&explanation.normalized, LABEL_WIDTH).dimmed()
    );
    if explanation.zero_vector {
        println!(
            "  {} no known terms; every score is 0 and the first rows win",
            "Warning:".yellow()
        );
    }

    display_candidates("Categories", &explanation.categories);
    display_candidates("Product types", &explanation.product_types);
}

fn display_candidates(title: &str, candidates: &[Candidate]) {
    println!("\n  {}", title.bold());
    println!(
        "  {:>4}  {:>6}  {:<8}  {}",
        "Rank".dimmed(),
        "Score".dimmed(),
        "Id".dimmed(),
        "Label".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, candidate) in candidates.iter().enumerate() {
        let score = format!("{:.3}", candidate.score);
        let colored_score = if candidate.score >= 0.5 {
            score.bright_green()
        } else if candidate.score >= 0.2 {
            score.bright_yellow()
        } else {
            score.normal()
        };
        println!(
            "  {:>4}. {:>6}  {:<8}  {}",
            i + 1,
            colored_score,
            candidate.id.as_deref().unwrap_or("-"),
            truncate_chars(&candidate.label, LABEL_WIDTH),
        );
    }
}

/// Display the header of each loaded table.
pub fn display_columns(tables: &[&LoadedTable]) {
    for loaded in tables {
        println!(
            "{} ({} rows)",
            loaded.source.bold(),
            loaded.table.len()
        );
        for (i, name) in loaded.table.headers().iter().enumerate() {
            println!("  {:>3}. {}", i + 1, name);
        }
        if loaded.skipped > 0 {
            println!("  {}", format!("{} malformed rows skipped", loaded.skipped).dimmed());
        }
        println!();
    }
}
