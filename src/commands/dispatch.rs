//! Command dispatch logic for gradebook

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use gradebook_core::error::{GradebookError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the root directory
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if cli.verbose {
        eprintln!("resolve_root: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(GradebookError::UsageError(
            "no command given (see --help)".to_string(),
        )),

        Some(Commands::Init { visible, course }) => {
            commands::init::execute(cli, &root, *visible, course.clone())
        }

        Some(Commands::Add(args)) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::add::execute(cli, &store, args)
        }

        Some(Commands::List) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::list::execute(cli, &store)
        }

        Some(Commands::Show { id }) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::show::execute(cli, &store, *id)
        }

        Some(Commands::Update(args)) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::update::execute(cli, &store, args)
        }

        Some(Commands::Remove { id }) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::remove::execute(cli, &store, *id)
        }

        Some(Commands::Stats) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::stats::execute(cli, &store)
        }

        Some(Commands::Validate) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::validate::execute(cli, &store)
        }

        Some(Commands::WhatIf { target }) => {
            let store = commands::helpers::open_store(cli, &root)?;
            commands::what_if::execute(cli, &store, *target)
        }
    }
}
