//! depmat - Dependency matrix compiler library
//!
//! This library compiles one declarative specification of packages, grouped
//! into named sets and varying across build axes, into concrete dependency
//! manifests:
//! - Conda-style environment files (YAML)
//! - Plain requirement lists
//! - Packaging-metadata fragments (TOML extras tables)

pub mod cli;
pub mod domain;
pub mod emit;
pub mod error;
pub mod matrix;
pub mod merge;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod schema;
