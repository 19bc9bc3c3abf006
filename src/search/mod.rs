//! Boolean search assembly.
//!
//! Turns a role group plus caller overrides into the set of platform
//! search strings a sourcer would paste into LinkedIn Recruiter or a
//! similar engine. Output is deterministic: identical inputs yield
//! byte-identical strings, with term order following the taxonomy's
//! insertion order.

mod assembler;
mod clauses;
mod locations;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use assembler::{AssemblerConfig, BooleanAssembler, SearchOptions};
pub use locations::LocationIndex;

pub(crate) use clauses::or_clause;

/// The search variants the assembler produces, broad to narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    /// Title variants only.
    Basic,
    /// One OR-pool over titles, skills, and competitors.
    Comprehensive,
    /// Titles plus the top-K skills.
    Focused,
    /// Titles scoped to competitor companies.
    Competitive,
    /// Titles plus the full skill list.
    SkillBased,
    /// Titles plus the open-to-work qualifier boilerplate.
    OpenToWork,
    /// Titles plus the certification qualifier boilerplate.
    Certification,
}

impl SearchType {
    /// Declaration order, which is also priority order.
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::Comprehensive,
        Self::Focused,
        Self::Competitive,
        Self::SkillBased,
        Self::OpenToWork,
        Self::Certification,
    ];

    /// Static priority rank, assigned per type and independent of input.
    /// Lower is higher priority: broader searches run first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Comprehensive => 2,
            Self::Focused => 3,
            Self::Competitive => 4,
            Self::SkillBased => 5,
            Self::OpenToWork => 6,
            Self::Certification => 7,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comprehensive => "comprehensive",
            Self::Focused => "focused",
            Self::Competitive => "competitive",
            Self::SkillBased => "skill_based",
            Self::OpenToWork => "open_to_work",
            Self::Certification => "certification",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One assembled Boolean query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub search_type: SearchType,
    /// The Boolean string, ready for the target platform.
    pub query: String,
    /// Static rank from [`SearchType::priority`].
    pub priority: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_are_static_and_ordered() {
        let ranks: Vec<u8> = SearchType::ALL.iter().map(|t| t.priority()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_labels_match_serde_names() {
        for search_type in SearchType::ALL {
            let json = serde_json::to_string(&search_type).unwrap();
            assert_eq!(json, format!("\"{search_type}\""));
        }
    }
}
