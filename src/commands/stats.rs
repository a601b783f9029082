//! `gradebook stats` command - current weighted average and remaining weight

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::stats::current_stats;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the stats command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let ledger = store.load_ledger()?;
    let stats = current_stats(ledger.assessments());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("current weighted: {}", stats.current_weighted);
            println!("weight done: {}%", stats.weight_done);
            println!("remaining weight: {}%", stats.remaining_weight);
        }
    }

    Ok(())
}
