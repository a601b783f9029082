//! `gradebook update` command - replace fields of an assessment
//!
//! Only the flags given are replaced; `--clear-score` marks the
//! assessment as not yet graded again. An update with no flags is a
//! no-op that prints the row unchanged.

use std::time::Instant;

use tracing::debug;

use gradebook_core::assessment::{parse_due_date, Patch};
use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::Store;

use crate::cli::{Cli, UpdateArgs};

/// Execute the update command
pub fn execute(cli: &Cli, store: &Store, args: &UpdateArgs) -> Result<()> {
    let start = Instant::now();

    let due_date = args.due.as_deref().map(parse_due_date).transpose()?;

    let patch = Patch {
        title: args.title.clone(),
        weight_pct: args.weight,
        due_date,
        score_pct: if args.clear_score {
            Some(None)
        } else {
            args.score.map(Some)
        },
    };

    let mut ledger = store.load_ledger()?;
    let updated = ledger.update(args.id, patch)?.clone();
    store.save_ledger(&ledger)?;

    if cli.verbose {
        debug!(id = updated.id, elapsed = ?start.elapsed(), "update_assessment");
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        OutputFormat::Human => {
            println!("{}", updated.id);
        }
    }

    Ok(())
}
