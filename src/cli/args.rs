//! Argument structs shared by add/update subcommands

use clap::Args;

/// Arguments for `gradebook add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Assessment title
    pub title: String,

    /// Weight toward the final grade, in percent (0-100)
    #[arg(long, short, allow_hyphen_values = true)]
    pub weight: f64,

    /// Due date (YYYY-MM-DD)
    #[arg(long, short)]
    pub due: String,

    /// Score in percent (0-100), if already graded
    #[arg(long, short, allow_hyphen_values = true)]
    pub score: Option<f64>,
}

/// Arguments for `gradebook update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Assessment id
    pub id: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New weight in percent (0-100)
    #[arg(long)]
    pub weight: Option<f64>,

    /// New due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    /// New score in percent (0-100)
    #[arg(long, conflicts_with = "clear_score")]
    pub score: Option<f64>,

    /// Mark the assessment as not yet graded
    #[arg(long)]
    pub clear_score: bool,
}
