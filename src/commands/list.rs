//! `gradebook list` command - list assessments
//!
//! Deterministic ordering: due date, then id.

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the list command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let ledger = store.load_ledger()?;
    let rows = ledger.list();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Human => {
            if rows.is_empty() {
                if !cli.quiet {
                    println!("No assessments");
                }
                return Ok(());
            }

            if !cli.quiet {
                if let Some(course) = &store.config().course {
                    println!("{course}");
                }
            }
            for row in rows {
                let score = row
                    .score_pct
                    .map(|s| format!("{s}%"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:>4}  {}  weight={}%  score={}  {}",
                    row.id, row.due_date, row.weight_pct, score, row.title
                );
            }
        }
    }

    Ok(())
}
