//! Command handlers. Each command is a small adapter from CLI arguments
//! to the core API plus output formatting.

pub mod hybrid;
pub mod match_title;
pub mod matrix;
pub mod process;
pub mod show;
pub mod similar;
pub mod taxonomy;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Taxonomy => taxonomy::run(ctx),
        Commands::Show(args) => show::run(ctx, args),
        Commands::Match(args) => match_title::run(ctx, args),
        Commands::Similar(args) => similar::run(ctx, args),
        Commands::Matrix(args) => matrix::run(ctx, args),
        Commands::Hybrid(args) => hybrid::run(ctx, args),
        Commands::Process(args) => process::run(ctx, args),
    }
}
