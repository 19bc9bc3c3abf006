//! rboolean matrix - pairwise similarity matrix

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::pipeline::export;

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Role group ids (default: the whole taxonomy)
    pub ids: Vec<String>,

    /// Directory to write the matrix JSON into
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &MatrixArgs) -> Result<()> {
    // Duplicate ids are rejected by the engine, not deduplicated here.
    let ids = if args.ids.is_empty() {
        ctx.store.ids()
    } else {
        args.ids
            .iter()
            .map(|id| ctx.store.resolve(id))
            .collect::<Result<Vec<_>>>()?
    };

    let matrix = ctx.engine()?.build_similarity_matrix(&ids)?;

    if let Some(dir) = &args.output {
        let path = export::write_matrix_json(dir, &matrix)?;
        if !ctx.json {
            println!("{} {}", "matrix written:".green(), path.display());
        }
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    println!("{}", "Similarity matrix".bold());
    for (row, row_id) in matrix.ids.iter().enumerate() {
        let cells: Vec<String> = (0..matrix.len())
            .map(|col| format!("{:.2}", matrix.get(row, col)))
            .collect();
        println!("  {:30} {}", row_id.as_str(), cells.join("  "));
    }
    Ok(())
}
