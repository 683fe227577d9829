//! Explain command implementation.

use affinity::ScoreBreakdown;
use anyhow::Result;

use super::{Inputs, Session};
use crate::OutputFormat;

/// Print every signal's contribution to one candidate's score.
pub(crate) fn explain_candidate(inputs: &Inputs, candidate: &str) -> Result<()> {
    let session = Session::load(inputs)?;
    let focal = session.item(&inputs.focal)?;
    let candidate = session.item(candidate)?;

    let breakdown = session
        .service
        .explain(candidate, focal, &session.history, session.now)?;

    match inputs.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
        OutputFormat::Text => print_breakdown(&focal.id.to_string(), &breakdown),
    }

    Ok(())
}

fn print_breakdown(focal: &str, breakdown: &ScoreBreakdown) {
    println!("\nScore of {} for focal item {}", breakdown.id, focal);
    println!("{}", "━".repeat(48));
    for entry in &breakdown.contributions {
        let marker = if entry.value == 0.0 { ' ' } else { '*' };
        println!("{marker} {:<28} {:>10.4}", entry.signal, entry.value);
    }
    println!("{}", "─".repeat(48));
    println!("  {:<28} {:>10.4}", "total", breakdown.total);

    if !breakdown.is_relevant() {
        println!("\nThis candidate scores zero or less and would not be recommended.");
    }
    println!();
}
