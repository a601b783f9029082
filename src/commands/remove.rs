//! `gradebook remove` command - delete an assessment
//!
//! Idempotent: removing an unknown id succeeds, so a retried delete
//! never errors.

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the remove command
pub fn execute(cli: &Cli, store: &Store, id: u64) -> Result<()> {
    let mut ledger = store.load_ledger()?;
    let removed = ledger.remove(id);
    if removed {
        store.save_ledger(&ledger)?;
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "ok": true,
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                if removed {
                    println!("removed {id}");
                } else {
                    println!("nothing to remove");
                }
            }
        }
    }

    Ok(())
}
