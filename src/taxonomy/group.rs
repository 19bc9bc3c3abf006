use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RbError, Result};

/// One job-family cluster: the titles, skills, competitor companies,
/// relevant locations, and declared look-alike groups that drive Boolean
/// search generation for that family.
///
/// All term lists are ordered; rendering and similarity follow insertion
/// order, never set iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleGroup {
    /// Unique identifier across the taxonomy.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Title variants, broadest first. Must be non-empty.
    pub titles: Vec<String>,
    /// Related skills and tools.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Competitor companies for competitive sourcing.
    #[serde(default)]
    pub competitors: Vec<String>,
    /// Locations where this role family concentrates.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Ids of related role groups. Must resolve within the loaded taxonomy
    /// and must not include the group itself.
    #[serde(default)]
    pub lookalikes: Vec<String>,
}

impl RoleGroup {
    /// Structural validation of a single definition. Cross-references are
    /// checked by the store once the full set is known.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RbError::Taxonomy("role group id must be non-empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(RbError::Taxonomy(format!(
                "role group '{}' must have a non-empty name",
                self.id
            )));
        }
        if !self.titles.iter().any(|t| !t.trim().is_empty()) {
            return Err(RbError::Taxonomy(format!(
                "role group '{}' must define at least one title",
                self.id
            )));
        }
        if self.lookalikes.iter().any(|la| la == &self.id) {
            return Err(RbError::Taxonomy(format!(
                "role group '{}' must not list itself as a lookalike",
                self.id
            )));
        }
        Ok(())
    }
}

/// Validated role group identifier.
///
/// Only minted by [`crate::taxonomy::TaxonomyStore::resolve`], so holding
/// one means the id was checked against the loaded taxonomy at the
/// boundary instead of deep inside assembly logic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleGroupId(String);

impl RoleGroupId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleGroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
