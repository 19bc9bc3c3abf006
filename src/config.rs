//! Configuration loading.
//!
//! One TOML file with optional sections per component; every field has a
//! default so an absent file is a valid configuration. Components receive
//! their section at construction time — there is no global mutable
//! configuration state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RbError, Result};
use crate::matcher::MatcherConfig;
use crate::search::AssemblerConfig;
use crate::similarity::SimilarityConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub assembler: AssemblerConfig,
    #[serde(default)]
    pub similarity: SimilarityConfig,
    /// City → hierarchy-string overrides layered over the built-in
    /// location table.
    #[serde(default)]
    pub locations: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration, in precedence order: explicit path,
    /// `RBOOLEAN_CONFIG`, the global config file, defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("RBOOLEAN_CONFIG").ok().map(PathBuf::from));

        let config = if let Some(path) = explicit {
            Self::from_path(&path)?
        } else if let Some(global) = Self::global_path() {
            if global.exists() {
                Self::from_path(&global)?
            } else {
                Self::default()
            }
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| RbError::Config(format!("read config {}: {err}", path.display())))?;
        Ok(toml::from_str(&raw)?)
    }

    fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rboolean/config.toml"))
    }

    /// Fail fast on invalid overrides; a bad threshold aborts the run
    /// before any vacancy is touched.
    pub fn validate(&self) -> Result<()> {
        self.matcher.validate()?;
        self.assembler.validate()?;
        self.similarity.validate()?;
        Ok(())
    }
}
