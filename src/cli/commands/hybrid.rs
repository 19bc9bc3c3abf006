//! rboolean hybrid - pooled search over several role groups

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct HybridArgs {
    /// Role group ids to pool
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &HybridArgs) -> Result<()> {
    let ids = args
        .ids
        .iter()
        .map(|id| ctx.store.resolve(id))
        .collect::<Result<Vec<_>>>()?;

    let result = ctx.engine()?.generate_hybrid_search(&ids)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} {}", "Hybrid search over".bold(), args.ids.join(", ").bold());
    println!("{}", result.query);
    Ok(())
}
