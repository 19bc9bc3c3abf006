//! Application context shared by every CLI command.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::search::{BooleanAssembler, LocationIndex};
use crate::similarity::SimilarityEngine;
use crate::taxonomy::TaxonomyStore;

pub struct AppContext {
    pub store: TaxonomyStore,
    pub config: Config,
    pub json: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let store = match &cli.taxonomy {
            Some(path) if path.is_dir() => TaxonomyStore::from_dir(path)?,
            Some(path) => TaxonomyStore::from_path(path)?,
            None => TaxonomyStore::builtin()?,
        };
        Ok(Self {
            store,
            config,
            json: cli.json,
            verbosity: cli.verbose,
        })
    }

    /// An assembler configured from the loaded config file.
    pub fn assembler(&self) -> Result<BooleanAssembler> {
        let locations = LocationIndex::default().with_overrides(&self.config.locations);
        BooleanAssembler::new(self.config.assembler.clone(), locations)
    }

    /// A similarity engine over the loaded taxonomy.
    pub fn engine(&self) -> Result<SimilarityEngine<'_>> {
        SimilarityEngine::new(&self.store, self.config.similarity.clone(), self.assembler()?)
    }
}
