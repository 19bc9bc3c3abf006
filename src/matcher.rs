//! Free-text title matching against the role taxonomy.
//!
//! Scoring is deliberately simple substring matching: every title variant
//! of a group that occurs in the normalized input contributes its length,
//! so longer, more specific variants outrank short generic ones on a tie.
//! No NLP beyond that.

use serde::{Deserialize, Serialize};

use crate::error::{RbError, Result};
use crate::taxonomy::{RoleGroupId, TaxonomyStore};
use crate::utils::text::normalize;

/// Matching thresholds, scoped per matcher instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum score a group must reach to count as a match.
    /// Default: 1, i.e. any positive score.
    #[serde(default = "default_min_score")]
    pub min_score: usize,
}

fn default_min_score() -> usize {
    1
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_score == 0 {
            return Err(RbError::Config(
                "matcher min_score must be positive; a zero threshold would match everything"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Maps free-text job titles to the best-matching role group.
#[derive(Debug)]
pub struct TitleMatcher<'a> {
    store: &'a TaxonomyStore,
    config: MatcherConfig,
}

impl<'a> TitleMatcher<'a> {
    pub fn new(store: &'a TaxonomyStore, config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Best-matching role group for a free-text title, or `None` when no
    /// group clears the threshold. `None` is an expected outcome the
    /// caller must handle per item, never an error.
    ///
    /// Ties break alphabetically by id: groups are scanned in id order and
    /// only a strictly higher score replaces the current best.
    #[must_use]
    pub fn find_best_match(&self, free_text: &str) -> Option<RoleGroupId> {
        let haystack = normalize(free_text);
        if haystack.is_empty() {
            return None;
        }

        let mut best: Option<(&str, usize)> = None;
        for group in self.store.iter() {
            let score = score_group(&haystack, &group.titles);
            if score >= self.config.min_score
                && best.is_none_or(|(_, best_score)| score > best_score)
            {
                best = Some((&group.id, score));
            }
        }

        let (id, score) = best?;
        tracing::debug!(%id, score, "title matched");
        self.store.resolve(id).ok()
    }
}

/// Sum of the normalized lengths of every title variant found in the
/// haystack. Length weighting makes "werkvoorbereider elektrotechniek"
/// beat a bare "werkvoorbereider".
fn score_group(haystack: &str, titles: &[String]) -> usize {
    titles
        .iter()
        .map(|title| normalize(title))
        .filter(|needle| !needle.is_empty() && haystack.contains(needle.as_str()))
        .map(|needle| needle.len())
        .sum()
}
