//! `gradebook validate` command - check the weight-sum invariant
//!
//! A total above 100% is reported in the payload, not as a process
//! error: the command itself still exits 0.

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::stats::validate_weights;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the validate command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let ledger = store.load_ledger()?;
    let check = validate_weights(ledger.assessments());

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        OutputFormat::Human => {
            println!("{}", check.message);
        }
    }

    Ok(())
}
