//! Output kind definitions for supported manifest syntaxes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported output manifest kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Conda-style environment definition (YAML)
    Environment,
    /// Plain newline-delimited requirement list
    RequirementList,
    /// Packaging-metadata fragment (TOML extras table)
    PackagingMetadata,
}

impl OutputKind {
    /// Returns the canonical spelling used in specification documents
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Environment => "environment",
            OutputKind::RequirementList => "requirement-list",
            OutputKind::PackagingMetadata => "packaging-metadata",
        }
    }

    /// Returns the file extension for generated manifests of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Environment => "yaml",
            OutputKind::RequirementList => "txt",
            OutputKind::PackagingMetadata => "toml",
        }
    }

    /// Returns the human-readable name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            OutputKind::Environment => "environment file",
            OutputKind::RequirementList => "requirement list",
            OutputKind::PackagingMetadata => "packaging metadata",
        }
    }

    /// Parses the canonical spelling, returning None for anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "environment" => Some(OutputKind::Environment),
            "requirement-list" => Some(OutputKind::RequirementList),
            "packaging-metadata" => Some(OutputKind::PackagingMetadata),
            _ => None,
        }
    }

    /// Returns all supported output kinds
    pub fn all() -> &'static [OutputKind] {
        &[
            OutputKind::Environment,
            OutputKind::RequirementList,
            OutputKind::PackagingMetadata,
        ]
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
