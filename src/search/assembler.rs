//! The Boolean search assembler.
//!
//! Every variant shares one template: a parenthesized OR-group of title
//! variants, AND-combined body clauses per variant, then the caller
//! overrides in fixed order — extra skills (each required individually),
//! location, and a trailing NOT-group for exclusions.
//!
//! ## Determinism
//!
//! Identical group + identical options always produce byte-identical
//! strings. Terms render in taxonomy insertion order and the variant map
//! is a `BTreeMap`, so nothing depends on hash iteration order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RbError, Result};
use crate::taxonomy::RoleGroup;
use crate::utils::text::dedup_ordered;

use super::clauses::{and_join, company_clause, or_clause, quote_phrase};
use super::locations::LocationIndex;
use super::{SearchResult, SearchType};

/// Open-to-work qualifier terms, per the sourcing platform's conventions.
const OPEN_TO_WORK_TERMS: &[&str] =
    &["#OpenToWork", "open to work", "actively looking", "looking for"];

/// Certification qualifier terms (Dutch market boilerplate).
const CERTIFICATION_TERMS: &[&str] =
    &["certified", "certification", "certificaat", "gecertificeerd"];

/// Assembly parameters, scoped per assembler instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// How many leading skills the Focused variant keeps.
    /// Default: 3.
    #[serde(default = "default_top_k_skills")]
    pub top_k_skills: usize,
}

fn default_top_k_skills() -> usize {
    3
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            top_k_skills: default_top_k_skills(),
        }
    }
}

impl AssemblerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k_skills == 0 {
            return Err(RbError::Config(
                "top_k_skills must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Caller overrides applied uniformly to every variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Extra skills the candidate must have; each is ANDed individually.
    #[serde(default)]
    pub skills: Vec<String>,
    /// City or region; resolved through the location table.
    #[serde(default)]
    pub location: Option<String>,
    /// Company to include in competitive targeting.
    #[serde(default)]
    pub company: Option<String>,
    /// Terms to exclude via the trailing NOT-group.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Builds Boolean query variants for a role group.
#[derive(Debug, Clone)]
pub struct BooleanAssembler {
    config: AssemblerConfig,
    locations: LocationIndex,
}

impl Default for BooleanAssembler {
    fn default() -> Self {
        Self {
            config: AssemblerConfig::default(),
            locations: LocationIndex::default(),
        }
    }
}

impl BooleanAssembler {
    pub fn new(config: AssemblerConfig, locations: LocationIndex) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, locations })
    }

    /// Generate every applicable search variant for a group.
    ///
    /// Variants whose body collapses to nothing (Focused/SkillBased with
    /// no skills, Competitive with no companies) are omitted; Basic,
    /// OpenToWork, and Certification always render.
    #[must_use]
    pub fn generate_combined_search(
        &self,
        group: &RoleGroup,
        options: &SearchOptions,
    ) -> BTreeMap<SearchType, SearchResult> {
        SearchType::ALL
            .iter()
            .filter_map(|&search_type| {
                self.assemble(search_type, group, options)
                    .map(|result| (search_type, result))
            })
            .collect()
    }

    /// Assemble one variant, or `None` when its body has no terms.
    #[must_use]
    pub fn assemble(
        &self,
        search_type: SearchType,
        group: &RoleGroup,
        options: &SearchOptions,
    ) -> Option<SearchResult> {
        let clauses = self.variant_clauses(search_type, group, options)?;
        Some(self.finish(search_type, clauses, options))
    }

    /// Pooled template for hybrid searches: one OR-group of titles, then
    /// every pooled skill as an individual AND requirement.
    #[must_use]
    pub(crate) fn pooled_search(&self, titles: &[String], skills: &[String]) -> SearchResult {
        let mut clauses = vec![or_clause(titles)];
        clauses.extend(skills.iter().map(|skill| quote_phrase(skill)));
        SearchResult {
            search_type: SearchType::SkillBased,
            query: and_join(&clauses),
            priority: SearchType::SkillBased.priority(),
        }
    }

    fn variant_clauses(
        &self,
        search_type: SearchType,
        group: &RoleGroup,
        options: &SearchOptions,
    ) -> Option<Vec<String>> {
        let titles = or_clause(&group.titles);

        let clauses = match search_type {
            SearchType::Basic => vec![titles],
            SearchType::Comprehensive => {
                let pool = dedup_ordered(
                    group
                        .titles
                        .iter()
                        .chain(group.skills.iter())
                        .chain(group.competitors.iter()),
                );
                vec![or_clause(&pool)]
            }
            SearchType::Focused => {
                if group.skills.is_empty() {
                    return None;
                }
                let top = &group.skills[..group.skills.len().min(self.config.top_k_skills)];
                vec![titles, or_clause(top)]
            }
            SearchType::Competitive => {
                let companies = dedup_ordered(
                    group
                        .competitors
                        .iter()
                        .map(String::as_str)
                        .chain(options.company.as_deref()),
                );
                if companies.is_empty() {
                    return None;
                }
                vec![titles, company_clause(&companies)]
            }
            SearchType::SkillBased => {
                if group.skills.is_empty() {
                    return None;
                }
                vec![titles, or_clause(&group.skills)]
            }
            SearchType::OpenToWork => vec![titles, or_clause(OPEN_TO_WORK_TERMS)],
            SearchType::Certification => vec![titles, or_clause(CERTIFICATION_TERMS)],
        };

        Some(clauses)
    }

    /// Append the caller overrides and render the final string.
    ///
    /// Exclusion policy: an empty list omits the NOT-group entirely; a
    /// non-empty list always renders one parenthesized ` NOT (…)` group.
    fn finish(
        &self,
        search_type: SearchType,
        mut clauses: Vec<String>,
        options: &SearchOptions,
    ) -> SearchResult {
        for skill in &options.skills {
            if !skill.trim().is_empty() {
                clauses.push(quote_phrase(skill.trim()));
            }
        }

        if let Some(location) = options.location.as_deref() {
            if !location.trim().is_empty() {
                clauses.push(quote_phrase(&self.locations.resolve(location)));
            }
        }

        let mut query = and_join(&clauses);

        let exclusions = or_clause(&options.exclude);
        if !exclusions.is_empty() {
            query.push_str(&format!(" NOT ({exclusions})"));
        }

        SearchResult {
            search_type,
            query,
            priority: search_type.priority(),
        }
    }
}
