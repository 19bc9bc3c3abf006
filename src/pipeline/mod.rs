//! Batch processing of vacancy records.
//!
//! Vacancies are independent: matching and assembly for one never touch
//! state shared with another, so the batch is a rayon parallel map over
//! the read-only taxonomy. Unmatched titles are an expected per-item
//! outcome, not an error; the batch continues.

pub mod export;
pub mod training;

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::matcher::TitleMatcher;
use crate::search::{BooleanAssembler, LocationIndex, SearchOptions, SearchResult, SearchType};
use crate::taxonomy::{RoleGroupId, TaxonomyStore};
use crate::utils::text::sanitize;

/// One vacancy as delivered by the ingestion side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl VacancyRecord {
    /// Copy with control characters stripped and whitespace collapsed in
    /// every field. Applied before anything reaches the matcher.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            title: sanitize(&self.title),
            company: self.company.as_deref().map(sanitize),
            location: self.location.as_deref().map(sanitize),
        }
    }
}

/// Result of processing a single vacancy.
#[derive(Debug, Clone, Serialize)]
pub struct VacancyOutcome {
    pub vacancy: VacancyRecord,
    /// `None` when no role group cleared the matching threshold.
    pub matched: Option<RoleGroupId>,
    /// Empty when unmatched.
    pub searches: BTreeMap<SearchType, SearchResult>,
}

/// Matches and assembles searches for batches of vacancies.
pub struct BatchProcessor<'a> {
    store: &'a TaxonomyStore,
    matcher: TitleMatcher<'a>,
    assembler: BooleanAssembler,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(store: &'a TaxonomyStore, config: &Config) -> Result<Self> {
        let locations = LocationIndex::default().with_overrides(&config.locations);
        Ok(Self {
            store,
            matcher: TitleMatcher::new(store, config.matcher.clone())?,
            assembler: BooleanAssembler::new(config.assembler.clone(), locations)?,
        })
    }

    /// Process one vacancy: sanitize, match, assemble.
    #[must_use]
    pub fn process_one(&self, vacancy: &VacancyRecord) -> VacancyOutcome {
        let vacancy = vacancy.sanitized();
        let matched = self.matcher.find_best_match(&vacancy.title);

        let searches = match &matched {
            Some(id) => match self.store.get(id) {
                Ok(group) => {
                    let options = SearchOptions {
                        location: vacancy.location.clone(),
                        company: vacancy.company.clone(),
                        ..SearchOptions::default()
                    };
                    self.assembler.generate_combined_search(group, &options)
                }
                Err(_) => BTreeMap::new(),
            },
            None => {
                tracing::debug!(title = %vacancy.title, "no matching role group");
                BTreeMap::new()
            }
        };

        VacancyOutcome {
            vacancy,
            matched,
            searches,
        }
    }

    /// Parallel map over the batch; output order matches input order.
    #[must_use]
    pub fn process(&self, vacancies: &[VacancyRecord]) -> Vec<VacancyOutcome> {
        let outcomes: Vec<VacancyOutcome> = vacancies
            .par_iter()
            .map(|vacancy| self.process_one(vacancy))
            .collect();

        let matched = outcomes.iter().filter(|o| o.matched.is_some()).count();
        tracing::info!(
            total = outcomes.len(),
            matched,
            unmatched = outcomes.len() - matched,
            "batch processed"
        );
        outcomes
    }
}
