use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{RbError, Result};
use crate::utils::text::dedup_ordered;

use super::group::{RoleGroup, RoleGroupId};

/// Top-level document shape for taxonomy YAML files.
#[derive(Debug, Deserialize)]
struct TaxonomyDoc {
    groups: Vec<RoleGroup>,
}

/// Immutable store of validated role group definitions.
///
/// Construction is the only mutation point: definitions are validated,
/// checked for duplicate ids, and cross-checked for lookalike resolution.
/// Afterwards the store is read-only, so matching, assembly, and
/// similarity are pure functions of (store, inputs).
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    groups: BTreeMap<String, RoleGroup>,
}

impl TaxonomyStore {
    /// Build a store from in-memory definitions.
    ///
    /// Fails with [`RbError::Taxonomy`] on a duplicate id, a missing
    /// required field, a self-referencing lookalike, or a lookalike id
    /// that does not resolve within the given set.
    pub fn load(definitions: Vec<RoleGroup>) -> Result<Self> {
        let mut groups = BTreeMap::new();
        for group in definitions {
            group.validate()?;
            if groups.contains_key(&group.id) {
                return Err(RbError::Taxonomy(format!(
                    "duplicate role group id: {}",
                    group.id
                )));
            }
            groups.insert(group.id.clone(), group);
        }

        let store = Self { groups };
        store.validate_lookalikes()?;
        tracing::debug!(groups = store.groups.len(), "taxonomy loaded");
        Ok(store)
    }

    /// Dangling lookalikes are a load error, not a warning: the term pool
    /// feeds matching and similarity, and skipping unresolved references
    /// would make scores depend on taxonomy completeness.
    fn validate_lookalikes(&self) -> Result<()> {
        for group in self.groups.values() {
            for lookalike in &group.lookalikes {
                if !self.groups.contains_key(lookalike) {
                    return Err(RbError::Taxonomy(format!(
                        "role group '{}' references unknown lookalike '{lookalike}'",
                        group.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Parse a taxonomy from a YAML document.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let doc: TaxonomyDoc = serde_yaml::from_str(raw)?;
        Self::load(doc.groups)
    }

    /// Load a taxonomy from a single YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    /// Load and merge every `*.yaml`/`*.yml` file under a directory, in
    /// path order so repeated loads see the same sequence.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut files: Vec<_> = WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter(|entry| {
                matches!(
                    entry.path().extension().and_then(|ext| ext.to_str()),
                    Some("yaml" | "yml")
                )
            })
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();

        let mut definitions = Vec::new();
        for file in files {
            let raw = std::fs::read_to_string(&file)?;
            let doc: TaxonomyDoc = serde_yaml::from_str(&raw)?;
            definitions.extend(doc.groups);
        }
        Self::load(definitions)
    }

    /// The curated taxonomy shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(include_str!("builtin.yaml"))
    }

    /// Validate a raw id against the taxonomy, rejecting unknown ids at
    /// the boundary.
    pub fn resolve(&self, id: &str) -> Result<RoleGroupId> {
        if self.groups.contains_key(id) {
            Ok(RoleGroupId::new(id))
        } else {
            Err(RbError::UnknownRole(id.to_string()))
        }
    }

    /// Look up a validated id.
    pub fn get(&self, id: &RoleGroupId) -> Result<&RoleGroup> {
        self.groups
            .get(id.as_str())
            .ok_or_else(|| RbError::UnknownRole(id.to_string()))
    }

    /// All ids in alphabetical order.
    #[must_use]
    pub fn ids(&self) -> Vec<RoleGroupId> {
        self.groups.keys().cloned().map(RoleGroupId::new).collect()
    }

    /// Iterate groups in alphabetical id order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleGroup> {
        self.groups.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Ordered, deduplicated term pool for a group: titles, then skills,
    /// then the titles of its lookalike groups. First occurrence wins;
    /// term identity is case-insensitive. Consumed by matching and
    /// similarity.
    #[must_use]
    pub fn all_terms(&self, group: &RoleGroup) -> Vec<String> {
        let lookalike_titles = group
            .lookalikes
            .iter()
            .filter_map(|la| self.groups.get(la))
            .flat_map(|g| g.titles.iter());

        dedup_ordered(
            group
                .titles
                .iter()
                .chain(group.skills.iter())
                .chain(lookalike_titles),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, titles: &[&str], lookalikes: &[&str]) -> RoleGroup {
        RoleGroup {
            id: id.to_string(),
            name: id.to_uppercase(),
            titles: titles.iter().map(ToString::to_string).collect(),
            skills: Vec::new(),
            competitors: Vec::new(),
            locations: Vec::new(),
            lookalikes: lookalikes.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_load_and_resolve() {
        let store = TaxonomyStore::load(vec![group("a", &["A"], &[]), group("b", &["B"], &["a"])])
            .unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.resolve("a").is_ok());
        assert!(matches!(store.resolve("missing"), Err(RbError::UnknownRole(_))));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let err = TaxonomyStore::load(vec![group("a", &["A"], &[]), group("a", &["B"], &[])])
            .unwrap_err();
        assert!(matches!(err, RbError::Taxonomy(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_dangling_lookalike_fails() {
        let err = TaxonomyStore::load(vec![group("a", &["A"], &["ghost"])]).unwrap_err();
        assert!(matches!(err, RbError::Taxonomy(_)));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_all_terms_order_and_dedup() {
        let mut a = group("a", &["Engineer", "Developer"], &["b"]);
        a.skills = vec!["Python".to_string(), "engineer".to_string()];
        let b = group("b", &["Developer", "Coder"], &[]);

        let store = TaxonomyStore::load(vec![a, b]).unwrap();
        let id = store.resolve("a").unwrap();
        let terms = store.all_terms(store.get(&id).unwrap());

        // Titles, skills, then lookalike titles; case-insensitive dedup
        // keeps the first occurrence.
        assert_eq!(terms, vec!["Engineer", "Developer", "Python", "Coder"]);
    }

    #[test]
    fn test_from_yaml_roundtrip() {
        let raw = r#"
groups:
  - id: demo
    name: Demo
    titles: ["Demo Engineer"]
    skills: ["Rust"]
"#;
        let store = TaxonomyStore::from_yaml(raw).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_builtin_loads() {
        let store = TaxonomyStore::builtin().unwrap();
        assert!(store.resolve("werkvoorbereider_elektro").is_ok());
        assert!(store.resolve("software_engineer").is_ok());
    }
}
