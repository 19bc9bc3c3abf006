//! Role taxonomy: immutable role group definitions and the store that
//! validates and serves them.
//!
//! The taxonomy is loaded once at startup (built-in set, a YAML file, or a
//! directory of YAML files) and is read-only afterwards, so every consumer
//! can share it freely across threads.

mod group;
mod store;

pub use group::{RoleGroup, RoleGroupId};
pub use store::TaxonomyStore;
