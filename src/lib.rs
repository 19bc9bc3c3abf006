//! rboolean - Boolean search automation for technical recruitment.
//!
//! The core is three pure components over an immutable role taxonomy:
//!
//! - [`matcher::TitleMatcher`] maps free-text job titles to role groups
//! - [`search::BooleanAssembler`] renders deterministic Boolean query
//!   variants per group, with caller overrides for location, extra
//!   skills, company, and exclusions
//! - [`similarity::SimilarityEngine`] scores group overlap, ranks
//!   look-alikes, and pools hybrid searches
//!
//! The [`pipeline`] and [`cli`] layers are thin collaborators around
//! those components: file ingestion, parallel batch processing, and
//! export are kept out of the core, which only consumes and produces
//! in-memory structures.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod search;
pub mod similarity;
pub mod taxonomy;
pub mod utils;

pub use error::{RbError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
