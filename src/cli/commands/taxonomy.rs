//! rboolean taxonomy - list the loaded role groups

use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &AppContext) -> Result<()> {
    if ctx.json {
        let groups: Vec<_> = ctx.store.iter().collect();
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("{}", format!("Role taxonomy ({} groups)", ctx.store.len()).bold());
    println!();
    for group in ctx.store.iter() {
        println!("{}  {}", group.id.bold(), group.name);
        println!(
            "    {} titles, {} skills, {} competitors",
            group.titles.len(),
            group.skills.len(),
            group.competitors.len()
        );
        if !group.lookalikes.is_empty() {
            println!("    lookalikes: {}", group.lookalikes.join(", "));
        }
        if !group.locations.is_empty() {
            println!("    locations: {}", group.locations.join(", "));
        }
    }
    Ok(())
}
