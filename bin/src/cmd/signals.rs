//! Signal listing command implementation.

use affinity::signals::registry::{SignalGroup, available_groups, signals_by_group};
use anyhow::{Result, bail};

/// List available signals, optionally filtered by group.
pub(crate) fn list_signals(group: Option<&str>, verbose: bool) -> Result<()> {
    let groups = match group {
        Some(name) => match SignalGroup::from_name(name) {
            Some(group) => vec![group],
            None => bail!("unknown signal group '{name}' (expected metadata, gated or engagement)"),
        },
        None => available_groups(),
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Available Signals                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for group in groups {
        println!("{:?}: {}", group, group.description());
        println!("{}", "-".repeat(60));

        for info in signals_by_group(&group) {
            if verbose {
                println!(
                    "  {:25} {:>5}  {}",
                    info.name, info.weight, info.description
                );
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for weights and descriptions.\n");
    }

    Ok(())
}
