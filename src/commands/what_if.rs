//! `gradebook what-if` command - required average to reach a target

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::stats::what_if;
use gradebook_core::store::Store;

use crate::cli::Cli;

/// Execute the what-if command
pub fn execute(cli: &Cli, store: &Store, target: f64) -> Result<()> {
    let ledger = store.load_ledger()?;
    let projection = what_if(ledger.assessments(), target)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
        OutputFormat::Human => match projection.required_avg {
            Some(required) => {
                let verdict = if projection.attainable {
                    "attainable"
                } else {
                    "not attainable"
                };
                println!(
                    "need an average of {required}% on remaining work to reach {target}% ({verdict})"
                );
            }
            None => {
                if projection.attainable {
                    println!("nothing remaining; target {target}% is already met");
                } else {
                    println!("nothing remaining; target {target}% was not reached");
                }
            }
        },
    }

    Ok(())
}
