//! rboolean match - map a free-text title to a role group

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::matcher::TitleMatcher;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Free-text job title
    pub title: String,
}

pub fn run(ctx: &AppContext, args: &MatchArgs) -> Result<()> {
    let matcher = TitleMatcher::new(&ctx.store, ctx.config.matcher.clone())?;
    let matched = matcher.find_best_match(&args.title);

    if ctx.json {
        let value = serde_json::json!({
            "title": args.title,
            "matched": matched.as_ref().map(|id| id.as_str()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match matched {
        Some(id) => {
            let group = ctx.store.get(&id)?;
            println!("{} {} ({})", "matched:".green(), id.as_str().bold(), group.name);
        }
        None => println!("{} no role group matched", "unmatched:".yellow()),
    }
    Ok(())
}
