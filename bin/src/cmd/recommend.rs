//! Recommend command implementation.

use affinity::{Recommender, ScoredCandidate};
use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::{Inputs, Session};
use crate::OutputFormat;

/// One output row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Row<'a> {
    rank: usize,
    #[serde(flatten)]
    candidate: ScoredCandidate<'a>,
}

/// Rank the catalog against the focal item and print the result.
pub(crate) fn recommend(inputs: &Inputs, limit: Option<usize>) -> Result<()> {
    let session = Session::load(inputs)?;
    let focal = session.item(&inputs.focal)?;

    let ranked = session.service.recommend(
        &session.catalog,
        focal,
        &session.history,
        session.now,
        limit,
    )?;
    info!(
        focal = %focal.id,
        catalog = session.catalog.len(),
        returned = ranked.len(),
        "recommendations computed"
    );

    match inputs.format {
        OutputFormat::Json => {
            let rows: Vec<Row<'_>> = ranked
                .into_iter()
                .enumerate()
                .map(|(i, candidate)| Row {
                    rank: i + 1,
                    candidate,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => print_table(focal, &ranked),
    }

    Ok(())
}

fn print_table(focal: &affinity::ContentItem, ranked: &[ScoredCandidate<'_>]) {
    println!(
        "\nRecommendations for {} ({})",
        focal.id,
        focal.category.map_or("uncategorized", |c| c.as_str())
    );
    println!("{}", "━".repeat(72));

    if ranked.is_empty() {
        println!("No relevant items found.\n");
        return;
    }

    println!("{:>4}  {:<12} {:>9}  {:<14} Title", "Rank", "Id", "Score", "Category");
    println!("{}", "─".repeat(72));
    for (i, candidate) in ranked.iter().enumerate() {
        let item = candidate.item;
        println!(
            "{:>4}  {:<12} {:>9.3}  {:<14} {}",
            i + 1,
            item.id.to_string(),
            candidate.score,
            item.category.map_or("-", |c| c.as_str()),
            item.title.as_deref().unwrap_or("")
        );
    }
    println!();
}
