//! Role group similarity and look-alike search generation.
//!
//! ## Scoring
//!
//! Similarity between two groups is the Jaccard overlap of their term
//! pools (titles, skills, lookalikes' titles — see
//! [`TaxonomyStore::all_terms`]):
//!
//! ```text
//! score(A, B) = |terms(A) ∩ terms(B)| / |terms(A) ∪ terms(B)|
//! ```
//!
//! Term identity is case-insensitive. The score is symmetric, lands in
//! [0, 1], and a group compared with itself scores exactly 1.0.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{RbError, Result};
use crate::search::{BooleanAssembler, SearchOptions, SearchResult, SearchType};
use crate::taxonomy::{RoleGroup, RoleGroupId, TaxonomyStore};
use crate::utils::text::{dedup_ordered, fold_key};

/// Ranking thresholds, scoped per engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Minimum score for [`SimilarityEngine::find_similar_profiles`].
    /// Default: 0.3.
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

fn default_min_similarity() -> f64 {
    0.3
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            min_similarity: default_min_similarity(),
        }
    }
}

impl SimilarityConfig {
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.min_similarity)
    }
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
        return Err(RbError::Config(format!(
            "similarity threshold must be within [0, 1], got {threshold}"
        )));
    }
    Ok(())
}

/// Jaccard similarity between two role groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityScore {
    pub a: RoleGroupId,
    pub b: RoleGroupId,
    /// Overlap score in [0, 1].
    pub score: f64,
    /// Shared term count.
    pub intersection: usize,
    /// Combined distinct term count.
    pub union: usize,
}

/// Symmetric N×N similarity matrix over a validated id list. Handed to
/// visualization/export collaborators as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityMatrix {
    pub ids: Vec<RoleGroupId>,
    /// Row-major scores, `ids.len()` squared.
    pub scores: Vec<f64>,
}

impl SimilarityMatrix {
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.scores[row * self.ids.len() + col]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A declared lookalike with its searches and score, part of a
/// [`LookalikeReport`].
#[derive(Debug, Clone, Serialize)]
pub struct LookalikeEntry {
    pub id: RoleGroupId,
    pub name: String,
    pub score: SimilarityScore,
    pub searches: BTreeMap<SearchType, SearchResult>,
}

/// A cross-match search targeting profiles with overlap between two
/// groups: pooled lead titles plus their shared skills.
#[derive(Debug, Clone, Serialize)]
pub struct CrossMatch {
    pub primary: RoleGroupId,
    pub lookalike: RoleGroupId,
    pub query: String,
}

/// Everything a sourcer needs to widen a search to a group's declared
/// lookalikes.
#[derive(Debug, Clone, Serialize)]
pub struct LookalikeReport {
    pub primary: RoleGroupId,
    pub searches: BTreeMap<SearchType, SearchResult>,
    pub lookalikes: Vec<LookalikeEntry>,
    pub cross_matches: Vec<CrossMatch>,
}

/// Computes pairwise similarity and pooled hybrid searches over the
/// taxonomy.
#[derive(Debug)]
pub struct SimilarityEngine<'a> {
    store: &'a TaxonomyStore,
    assembler: BooleanAssembler,
    config: SimilarityConfig,
}

impl<'a> SimilarityEngine<'a> {
    pub fn new(
        store: &'a TaxonomyStore,
        config: SimilarityConfig,
        assembler: BooleanAssembler,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            assembler,
            config,
        })
    }

    /// Jaccard overlap of the two groups' term pools. Symmetric; a group
    /// against itself scores exactly 1.0.
    #[must_use]
    pub fn compute_similarity(&self, a: &RoleGroup, b: &RoleGroup) -> SimilarityScore {
        let terms_a: HashSet<String> =
            self.store.all_terms(a).iter().map(|t| fold_key(t)).collect();
        let terms_b: HashSet<String> =
            self.store.all_terms(b).iter().map(|t| fold_key(t)).collect();

        let intersection = terms_a.intersection(&terms_b).count();
        let union = terms_a.union(&terms_b).count();
        let score = if union == 0 {
            // Two empty pools are indistinguishable; validated groups
            // always have titles, so this is unreachable in practice.
            1.0
        } else {
            intersection as f64 / union as f64
        };

        SimilarityScore {
            a: RoleGroupId::new(a.id.clone()),
            b: RoleGroupId::new(b.id.clone()),
            score,
            intersection,
            union,
        }
    }

    /// Rank every other group against `id`, dropping scores below the
    /// threshold (the engine default unless overridden per call).
    /// Descending by score; ties break alphabetically by the other id;
    /// `id` itself is never included.
    pub fn find_similar_profiles(
        &self,
        id: &RoleGroupId,
        min_similarity: Option<f64>,
    ) -> Result<Vec<SimilarityScore>> {
        let threshold = min_similarity.unwrap_or(self.config.min_similarity);
        validate_threshold(threshold)?;

        let base = self.store.get(id)?;
        let mut scores: Vec<SimilarityScore> = self
            .store
            .iter()
            .filter(|other| other.id != base.id)
            .map(|other| self.compute_similarity(base, other))
            .filter(|entry| entry.score >= threshold)
            .collect();

        // Sort by descending score; the store iterates alphabetically, so
        // a stable sort keeps equal scores in id order.
        scores.sort_by(|x, y| {
            y.score
                .partial_cmp(&x.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(scores)
    }

    /// Build the full pairwise matrix for a validated id list.
    ///
    /// Fails with [`RbError::Dimension`] when the list contains
    /// duplicates: a matrix with repeated axes silently misleads the
    /// downstream visualization.
    pub fn build_similarity_matrix(&self, ids: &[RoleGroupId]) -> Result<SimilarityMatrix> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(RbError::Dimension(format!(
                    "duplicate role group id in matrix request: {id}"
                )));
            }
        }

        let groups = ids
            .iter()
            .map(|id| self.store.get(id))
            .collect::<Result<Vec<_>>>()?;

        let n = groups.len();
        let mut scores = vec![0.0; n * n];
        for i in 0..n {
            scores[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let score = self.compute_similarity(groups[i], groups[j]).score;
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        Ok(SimilarityMatrix {
            ids: ids.to_vec(),
            scores,
        })
    }

    /// One pooled hybrid search over several groups: the union of their
    /// title variants as a single OR-group, the union of their skills as
    /// AND requirements. Term order follows the given id order, then each
    /// group's insertion order.
    pub fn generate_hybrid_search(&self, ids: &[RoleGroupId]) -> Result<SearchResult> {
        if ids.is_empty() {
            return Err(RbError::Dimension(
                "hybrid search needs at least one role group id".to_string(),
            ));
        }

        let groups = ids
            .iter()
            .map(|id| self.store.get(id))
            .collect::<Result<Vec<_>>>()?;

        let titles = dedup_ordered(groups.iter().flat_map(|g| g.titles.iter()));
        let skills = dedup_ordered(groups.iter().flat_map(|g| g.skills.iter()));

        Ok(self.assembler.pooled_search(&titles, &skills))
    }

    /// Searches for a group's declared lookalikes: the primary's variant
    /// set, each lookalike's variant set with its similarity score, and a
    /// cross-match query per lookalike.
    pub fn lookalike_report(&self, id: &RoleGroupId) -> Result<LookalikeReport> {
        let primary = self.store.get(id)?;
        let options = SearchOptions::default();

        let mut lookalikes = Vec::new();
        let mut cross_matches = Vec::new();
        for lookalike_id in &primary.lookalikes {
            let lookalike_id = self.store.resolve(lookalike_id)?;
            let lookalike = self.store.get(&lookalike_id)?;

            lookalikes.push(LookalikeEntry {
                id: lookalike_id.clone(),
                name: lookalike.name.clone(),
                score: self.compute_similarity(primary, lookalike),
                searches: self.assembler.generate_combined_search(lookalike, &options),
            });
            cross_matches.push(CrossMatch {
                primary: id.clone(),
                lookalike: lookalike_id,
                query: self.cross_match_query(primary, lookalike),
            });
        }

        Ok(LookalikeReport {
            primary: id.clone(),
            searches: self.assembler.generate_combined_search(primary, &options),
            lookalikes,
            cross_matches,
        })
    }

    /// Cross-match query: the lead titles of both groups OR-pooled, ANDed
    /// with their shared skills (primary's order, capped at five).
    fn cross_match_query(&self, primary: &RoleGroup, lookalike: &RoleGroup) -> String {
        const LEAD_TITLES: usize = 3;
        const MAX_SHARED_SKILLS: usize = 5;

        let titles = dedup_ordered(
            primary
                .titles
                .iter()
                .take(LEAD_TITLES)
                .chain(lookalike.titles.iter().take(LEAD_TITLES)),
        );

        let lookalike_skills: HashSet<String> =
            lookalike.skills.iter().map(|s| fold_key(s)).collect();
        let shared: Vec<String> = primary
            .skills
            .iter()
            .filter(|skill| lookalike_skills.contains(&fold_key(skill)))
            .take(MAX_SHARED_SKILLS)
            .cloned()
            .collect();

        let pooled = self.assembler.pooled_search(&titles, &[]);
        if shared.is_empty() {
            pooled.query
        } else {
            format!(
                "{} AND ({})",
                pooled.query,
                crate::search::or_clause(&shared)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, titles: &[&str], skills: &[&str]) -> RoleGroup {
        RoleGroup {
            id: id.to_string(),
            name: id.to_uppercase(),
            titles: titles.iter().map(ToString::to_string).collect(),
            skills: skills.iter().map(ToString::to_string).collect(),
            competitors: Vec::new(),
            locations: Vec::new(),
            lookalikes: Vec::new(),
        }
    }

    fn store() -> TaxonomyStore {
        TaxonomyStore::load(vec![
            group("alpha", &["Engineer"], &["Python", "Rust"]),
            group("beta", &["Engineer"], &["Python", "Go"]),
            group("gamma", &["Painter"], &["Gouache"]),
        ])
        .unwrap()
    }

    fn engine(store: &TaxonomyStore) -> SimilarityEngine<'_> {
        SimilarityEngine::new(
            store,
            SimilarityConfig::default(),
            BooleanAssembler::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_self_similarity_is_one() {
        let store = store();
        let engine = engine(&store);
        for group in store.iter() {
            let score = engine.compute_similarity(group, group);
            assert!((score.score - 1.0).abs() < f64::EPSILON, "{}", group.id);
            assert_eq!(score.intersection, score.union);
        }
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let store = store();
        let engine = engine(&store);
        let a = store.get(&store.resolve("alpha").unwrap()).unwrap();
        let b = store.get(&store.resolve("beta").unwrap()).unwrap();
        let ab = engine.compute_similarity(a, b);
        let ba = engine.compute_similarity(b, a);
        assert_eq!(ab.score, ba.score);
        assert_eq!(ab.intersection, ba.intersection);
        // alpha: {engineer, python, rust}, beta: {engineer, python, go}
        assert_eq!(ab.intersection, 2);
        assert_eq!(ab.union, 4);
        assert!((ab.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_similar_excludes_self_and_filters() {
        let store = store();
        let engine = engine(&store);
        let alpha = store.resolve("alpha").unwrap();
        let similar = engine.find_similar_profiles(&alpha, None).unwrap();

        assert!(similar.iter().all(|s| s.b.as_str() != "alpha"));
        assert!(similar.iter().all(|s| s.score >= 0.3));
        // gamma shares nothing with alpha and is filtered out.
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].b.as_str(), "beta");
    }

    #[test]
    fn test_find_similar_sorted_descending() {
        let store = store();
        let engine = engine(&store);
        let alpha = store.resolve("alpha").unwrap();
        let similar = engine.find_similar_profiles(&alpha, Some(0.0)).unwrap();
        for window in similar.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let store = store();
        let engine = engine(&store);
        let alpha = store.resolve("alpha").unwrap();
        assert!(matches!(
            engine.find_similar_profiles(&alpha, Some(1.5)),
            Err(RbError::Config(_))
        ));
    }

    #[test]
    fn test_matrix_rejects_duplicates() {
        let store = store();
        let engine = engine(&store);
        let alpha = store.resolve("alpha").unwrap();
        let err = engine
            .build_similarity_matrix(&[alpha.clone(), alpha])
            .unwrap_err();
        assert!(matches!(err, RbError::Dimension(_)));
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let store = store();
        let engine = engine(&store);
        let matrix = engine.build_similarity_matrix(&store.ids()).unwrap();
        let n = matrix.len();
        for i in 0..n {
            assert!((matrix.get(i, i) - 1.0).abs() < f64::EPSILON);
            for j in 0..n {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_hybrid_pools_titles_and_skills() {
        let store = store();
        let engine = engine(&store);
        let ids = vec![store.resolve("alpha").unwrap(), store.resolve("beta").unwrap()];
        let result = engine.generate_hybrid_search(&ids).unwrap();
        // Titles dedup to one term; skills pool in id order.
        assert_eq!(result.query, "Engineer AND Python AND Rust AND Go");
    }

    #[test]
    fn test_hybrid_empty_ids_rejected() {
        let store = store();
        let engine = engine(&store);
        assert!(matches!(
            engine.generate_hybrid_search(&[]),
            Err(RbError::Dimension(_))
        ));
    }
}
