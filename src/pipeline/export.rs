//! File export of batch outcomes and similarity matrices.
//!
//! JSON for structured consumers, JSONL rows for spreadsheet-style
//! flattening. File names carry a timestamp so repeated runs never
//! clobber each other.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::similarity::SimilarityMatrix;

use super::VacancyOutcome;

/// One flattened row per generated search, spreadsheet-style.
#[derive(Debug, Serialize)]
struct SearchRow<'a> {
    vacancy_id: usize,
    title: &'a str,
    company: Option<&'a str>,
    location: Option<&'a str>,
    role_group: &'a str,
    search_type: String,
    priority: u8,
    query: &'a str,
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the full outcome structures as pretty JSON.
pub fn write_outcomes_json(dir: &Path, outcomes: &[VacancyOutcome]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("searches_{}.json", timestamp()));
    fs::write(&path, serde_json::to_string_pretty(outcomes)?)?;
    tracing::info!(path = %path.display(), outcomes = outcomes.len(), "outcomes exported");
    Ok(path)
}

/// Write one JSONL row per generated search, skipping unmatched
/// vacancies.
pub fn write_search_rows_jsonl(dir: &Path, outcomes: &[VacancyOutcome]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("search_rows_{}.jsonl", timestamp()));

    let mut file = fs::File::create(&path)?;
    let mut rows = 0usize;
    for (vacancy_id, outcome) in outcomes.iter().enumerate() {
        let Some(role_group) = &outcome.matched else {
            continue;
        };
        for result in outcome.searches.values() {
            let row = SearchRow {
                vacancy_id: vacancy_id + 1,
                title: &outcome.vacancy.title,
                company: outcome.vacancy.company.as_deref(),
                location: outcome.vacancy.location.as_deref(),
                role_group: role_group.as_str(),
                search_type: result.search_type.to_string(),
                priority: result.priority,
                query: &result.query,
            };
            serde_json::to_writer(&mut file, &row)?;
            file.write_all(b"\n")?;
            rows += 1;
        }
    }

    tracing::info!(path = %path.display(), rows, "search rows exported");
    Ok(path)
}

/// Write a similarity matrix as pretty JSON.
pub fn write_matrix_json(dir: &Path, matrix: &SimilarityMatrix) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("similarity_matrix_{}.json", timestamp()));
    fs::write(&path, serde_json::to_string_pretty(matrix)?)?;
    tracing::info!(path = %path.display(), groups = matrix.len(), "matrix exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pipeline::{BatchProcessor, VacancyRecord};
    use crate::taxonomy::TaxonomyStore;

    #[test]
    fn test_export_roundtrip() {
        let store = TaxonomyStore::builtin().unwrap();
        let processor = BatchProcessor::new(&store, &Config::default()).unwrap();
        let outcomes = processor.process(&[
            VacancyRecord {
                title: "Software Developer".to_string(),
                company: None,
                location: Some("Utrecht".to_string()),
            },
            VacancyRecord {
                title: "no such role".to_string(),
                company: None,
                location: None,
            },
        ]);

        let dir = tempfile::tempdir().unwrap();
        let json_path = write_outcomes_json(dir.path(), &outcomes).unwrap();
        let jsonl_path = write_search_rows_jsonl(dir.path(), &outcomes).unwrap();

        let raw = std::fs::read_to_string(json_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);

        let rows = std::fs::read_to_string(jsonl_path).unwrap();
        // Only the matched vacancy produces rows.
        for line in rows.lines() {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(row["role_group"], "software_engineer");
        }
        assert!(rows.lines().count() >= 5);
    }
}
