//! Helper functions shared across commands

use std::path::Path;

use crate::cli::Cli;
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Resolve the store from --store, or discover it upward from the root
pub fn open_store(cli: &Cli, root: &Path) -> Result<Store> {
    match &cli.store {
        Some(path) => Store::open(path),
        None => Store::discover(root),
    }
}
