//! rboolean process - batch vacancy file to search exports

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::pipeline::{BatchProcessor, VacancyRecord, export, training};

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input JSON file: an array of {title, company, location} records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "exports")]
    pub output: PathBuf,

    /// Also export the training datasets
    #[arg(long)]
    pub training: bool,
}

pub fn run(ctx: &AppContext, args: &ProcessArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.input)?;
    let vacancies: Vec<VacancyRecord> = serde_json::from_str(&raw)?;

    let processor = BatchProcessor::new(&ctx.store, &ctx.config)?;
    let outcomes = processor.process(&vacancies);

    let mut files = vec![
        export::write_outcomes_json(&args.output, &outcomes)?,
        export::write_search_rows_jsonl(&args.output, &outcomes)?,
    ];
    if args.training {
        files.extend(training::export_datasets(&args.output, &ctx.store)?);
    }

    let matched = outcomes.iter().filter(|o| o.matched.is_some()).count();

    if ctx.json {
        let value = serde_json::json!({
            "vacancies": outcomes.len(),
            "matched": matched,
            "unmatched": outcomes.len() - matched,
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "{} {} vacancies, {} matched",
        "processed:".green(),
        outcomes.len(),
        matched
    );
    println!("{}", "Generated files:".bold());
    for file in files {
        println!("  - {}", file.display());
    }
    Ok(())
}
