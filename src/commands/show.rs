//! `gradebook show` command - show one assessment

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the show command
pub fn execute(cli: &Cli, store: &Store, id: u64) -> Result<()> {
    let ledger = store.load_ledger()?;
    let assessment = ledger.get(id)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(assessment)?);
        }
        OutputFormat::Human => {
            println!("id: {}", assessment.id);
            println!("title: {}", assessment.title);
            println!("weight: {}%", assessment.weight_pct);
            println!("due: {}", assessment.due_date);
            match assessment.score_pct {
                Some(score) => println!("score: {score}%"),
                None => println!("score: not graded"),
            }
        }
    }

    Ok(())
}
