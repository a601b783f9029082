//! `gradebook init` command - initialize a new store

use std::path::Path;

use gradebook_core::error::Result;
use gradebook_core::format::OutputFormat;
use gradebook_core::store::{InitOptions, Store};

use crate::cli::Cli;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path, visible: bool, course: Option<String>) -> Result<()> {
    let options = InitOptions { visible, course };

    let store = match &cli.store {
        Some(path) => Store::init_at(path, options)?,
        None => Store::init(root, options)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "root": store.root().display().to_string(),
                "course": store.config().course,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized gradebook store at {}", store.root().display());
            }
        }
    }

    Ok(())
}
