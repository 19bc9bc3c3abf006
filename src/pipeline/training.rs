//! Training-data formatting from the taxonomy.
//!
//! Purely a data-format concern: the crate trains nothing. Classification
//! records map title texts to group ids; similarity pairs carry the
//! Jaccard score between group names so a downstream sentence-similarity
//! model can be fit elsewhere.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Serialize;

use crate::error::Result;
use crate::search::BooleanAssembler;
use crate::similarity::{SimilarityConfig, SimilarityEngine};
use crate::taxonomy::TaxonomyStore;

/// `{text, label}` classification sample.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRecord {
    pub text: String,
    pub label: String,
}

/// Scored sentence pair for similarity training.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityPair {
    pub sentence1: String,
    pub sentence2: String,
    pub score: f64,
}

/// How many skills each title is combined with in the classification set.
const SKILLS_PER_TITLE: usize = 5;

/// Title → group-id classification samples: every title variant on its
/// own, plus each lead title combined with the group's top skills.
#[must_use]
pub fn classification_dataset(store: &TaxonomyStore) -> Vec<ClassificationRecord> {
    let mut records = Vec::new();
    for group in store.iter() {
        for title in &group.titles {
            records.push(ClassificationRecord {
                text: title.clone(),
                label: group.id.clone(),
            });
        }
        for title in group.titles.iter().take(1) {
            for skill in group.skills.iter().take(SKILLS_PER_TITLE) {
                records.push(ClassificationRecord {
                    text: format!("{title} met ervaring in {skill}"),
                    label: group.id.clone(),
                });
            }
        }
    }
    records
}

/// Scored group-name pairs: same-group title pairs at 1.0, cross-group
/// pairs at their computed Jaccard similarity.
pub fn similarity_dataset(store: &TaxonomyStore) -> Result<Vec<SimilarityPair>> {
    let engine = SimilarityEngine::new(
        store,
        SimilarityConfig::default(),
        BooleanAssembler::default(),
    )?;

    let mut pairs = Vec::new();
    let groups: Vec<_> = store.iter().collect();

    for group in &groups {
        for window in group.titles.windows(2) {
            pairs.push(SimilarityPair {
                sentence1: window[0].clone(),
                sentence2: window[1].clone(),
                score: 1.0,
            });
        }
    }

    for (a, b) in groups.iter().tuple_combinations() {
        let score = engine.compute_similarity(a, b);
        pairs.push(SimilarityPair {
            sentence1: a.name.clone(),
            sentence2: b.name.clone(),
            score: score.score,
        });
    }

    Ok(pairs)
}

fn write_jsonl<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    for row in rows {
        serde_json::to_writer(&mut file, row)?;
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Write both datasets as JSONL files under `dir`.
pub fn export_datasets(dir: &Path, store: &TaxonomyStore) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let classification = classification_dataset(store);
    let classification_path = dir.join("classification.jsonl");
    write_jsonl(&classification_path, &classification)?;

    let similarity = similarity_dataset(store)?;
    let similarity_path = dir.join("similarity_pairs.jsonl");
    write_jsonl(&similarity_path, &similarity)?;

    tracing::info!(
        classification = classification.len(),
        similarity = similarity.len(),
        dir = %dir.display(),
        "training datasets exported"
    );
    Ok(vec![classification_path, similarity_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_covers_every_group() {
        let store = TaxonomyStore::builtin().unwrap();
        let records = classification_dataset(&store);
        for group in store.iter() {
            assert!(records.iter().any(|r| r.label == group.id));
        }
        // Skill-augmented samples are present too.
        assert!(records.iter().any(|r| r.text.contains("met ervaring in")));
    }

    #[test]
    fn test_similarity_pairs_scores_in_range() {
        let store = TaxonomyStore::builtin().unwrap();
        let pairs = similarity_dataset(&store).unwrap();
        assert!(!pairs.is_empty());
        for pair in &pairs {
            assert!((0.0..=1.0).contains(&pair.score));
        }
    }

    #[test]
    fn test_export_writes_both_files() {
        let store = TaxonomyStore::builtin().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let paths = export_datasets(dir.path(), &store).unwrap();
        assert_eq!(paths.len(), 2);
        for path in paths {
            assert!(path.exists());
            assert!(std::fs::read_to_string(path).unwrap().lines().count() > 0);
        }
    }
}
