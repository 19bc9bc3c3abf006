//! rboolean similar - rank look-alike role groups

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// Role group id to rank against
    pub id: String,

    /// Minimum similarity score in [0, 1] (default from config: 0.3)
    #[arg(long)]
    pub min_similarity: Option<f64>,
}

pub fn run(ctx: &AppContext, args: &SimilarArgs) -> Result<()> {
    let id = ctx.store.resolve(&args.id)?;
    let similar = ctx.engine()?.find_similar_profiles(&id, args.min_similarity)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&similar)?);
        return Ok(());
    }

    println!("{} {}", "Similar to".bold(), id.as_str().bold());
    if similar.is_empty() {
        println!("  (nothing above the threshold)");
    }
    for entry in &similar {
        println!(
            "  {:.2}  {}  ({} shared / {} total terms)",
            entry.score,
            entry.b.as_str().cyan(),
            entry.intersection,
            entry.union
        );
    }
    Ok(())
}
