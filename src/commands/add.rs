//! `gradebook add` command - record a new assessment
//!
//! `gradebook add <title> --weight W --due YYYY-MM-DD [--score S]`
//! prints the assigned id.

use std::time::Instant;

use tracing::debug;

use gradebook_core::assessment::{parse_due_date, Draft};
use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::Store;

use crate::cli::{AddArgs, Cli};

/// Execute the add command
pub fn execute(cli: &Cli, store: &Store, args: &AddArgs) -> Result<()> {
    let start = Instant::now();

    let due_date = parse_due_date(&args.due)?;

    let mut ledger = store.load_ledger()?;
    let created = ledger
        .add(Draft {
            title: args.title.clone(),
            weight_pct: args.weight,
            due_date,
            score_pct: args.score,
        })?
        .clone();
    store.save_ledger(&ledger)?;

    if cli.verbose {
        debug!(id = created.id, elapsed = ?start.elapsed(), "add_assessment");
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        OutputFormat::Human => {
            println!("{}", created.id);
        }
    }

    Ok(())
}
