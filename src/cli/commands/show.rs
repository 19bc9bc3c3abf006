//! rboolean show - Boolean search variants for one role group

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::search::SearchOptions;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Role group id
    pub id: String,

    /// Extra required skill (repeatable); each is ANDed individually
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Location filter, resolved through the city table
    #[arg(long)]
    pub location: Option<String>,

    /// Company for competitive targeting
    #[arg(long)]
    pub company: Option<String>,

    /// Term to exclude (repeatable), rendered as a trailing NOT-group
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &ShowArgs) -> Result<()> {
    let id = ctx.store.resolve(&args.id)?;
    let group = ctx.store.get(&id)?;

    let options = SearchOptions {
        skills: args.skills.clone(),
        location: args.location.clone(),
        company: args.company.clone(),
        exclude: args.exclude.clone(),
    };
    let searches = ctx.assembler()?.generate_combined_search(group, &options);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&searches)?);
        return Ok(());
    }

    println!("{} {}", "Boolean searches for".bold(), group.name.bold());
    for result in searches.values() {
        println!();
        println!(
            "[{}] {}",
            result.search_type.to_string().to_uppercase().cyan(),
            format!("priority {}", result.priority).dimmed()
        );
        println!("{}", result.query);
    }
    Ok(())
}
