//! The compiled specification model
//!
//! Built once by the schema module and immutable afterwards. Compilation is
//! a pure function over this model, so tasks can share it freely.

use super::{AxisTable, DependencySet, FileSpec};
use serde::{Deserialize, Serialize};

/// The fully validated specification document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Channel list passed through verbatim into environment outputs
    pub channels: Vec<String>,
    /// Global axis vocabulary
    pub axes: AxisTable,
    /// File specs in declaration order
    pub files: Vec<FileSpec>,
    /// Dependency sets in declaration order
    pub sets: Vec<DependencySet>,
}

impl Model {
    /// Looks up a file spec by name
    pub fn file(&self, name: &str) -> Option<&FileSpec> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Looks up a dependency set by name
    pub fn set(&self, name: &str) -> Option<&DependencySet> {
        self.sets.iter().find(|s| s.name == name)
    }
}
