//! Shared fixtures for integration tests.

use rboolean::taxonomy::TaxonomyStore;

/// The shipped taxonomy; most integration tests run against it.
pub fn builtin_store() -> TaxonomyStore {
    TaxonomyStore::builtin().expect("builtin taxonomy must load")
}
