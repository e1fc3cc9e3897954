//! Package entry structures
//!
//! A requirement string has the shape `name[constraint][; marker]`, e.g.
//! `numpy>=1.21`, `cmake`, or `tomli ; python_version < "3.11"`. The
//! constraint and marker are carried as opaque text; the compiler merges
//! textually and never resolves versions.

use super::OutputKind;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)\s*(.*)$").unwrap());

/// A parsed package reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name
    pub name: String,
    /// Optional version constraint, operator included (e.g. `>=1.21`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Optional pip-style environment marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Requirement {
    /// Creates a requirement with no constraint or marker
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: None,
            marker: None,
        }
    }

    /// Creates a requirement with a version constraint
    pub fn constrained(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: Some(constraint.into()),
            marker: None,
        }
    }

    /// Sets the environment marker (builder pattern)
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Parses a requirement string, returning None when no package name is present
    pub fn parse(text: &str) -> Option<Self> {
        let (spec, marker) = match text.split_once(';') {
            Some((spec, marker)) => (spec.trim(), Some(marker.trim())),
            None => (text.trim(), None),
        };

        let caps = REQUIREMENT_RE.captures(spec)?;
        let name = caps.get(1)?.as_str().to_string();
        let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        let constraint = if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        };
        let marker = marker.filter(|m| !m.is_empty()).map(str::to_string);

        Some(Self {
            name,
            constraint,
            marker,
        })
    }

    /// Returns the package reference without its marker (e.g. `numpy>=1.21`)
    pub fn spec_text(&self) -> String {
        match &self.constraint {
            Some(constraint) => format!("{}{}", self.name, constraint),
            None => self.name.clone(),
        }
    }

    /// Returns the full textual form including the marker, if any
    pub fn full_text(&self) -> String {
        match &self.marker {
            Some(marker) => format!("{}; {}", self.spec_text(), marker),
            None => self.spec_text(),
        }
    }

    /// Returns true if this requirement carries an environment marker
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_text())
    }
}

/// Which output kinds an entry is valid for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputRestriction {
    /// Valid for every output kind
    All,
    /// Valid only for the listed kinds
    Only(Vec<OutputKind>),
}

impl OutputRestriction {
    /// Returns true if the restriction admits the given kind
    pub fn admits(&self, kind: OutputKind) -> bool {
        match self {
            OutputRestriction::All => true,
            OutputRestriction::Only(kinds) => kinds.contains(&kind),
        }
    }
}

impl Default for OutputRestriction {
    fn default() -> Self {
        OutputRestriction::All
    }
}

/// One package entry in a dependency set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The package reference
    pub requirement: Requirement,
    /// Output kinds this entry is valid for
    #[serde(default)]
    pub outputs: OutputRestriction,
}

impl Entry {
    /// Creates an entry valid for all output kinds
    pub fn unrestricted(requirement: Requirement) -> Self {
        Self {
            requirement,
            outputs: OutputRestriction::All,
        }
    }

    /// Creates an entry restricted to the given output kinds
    pub fn restricted(requirement: Requirement, kinds: Vec<OutputKind>) -> Self {
        Self {
            requirement,
            outputs: OutputRestriction::Only(kinds),
        }
    }

    /// Returns true if this entry belongs in outputs of the given kind
    pub fn applies_to(&self, kind: OutputKind) -> bool {
        self.outputs.admits(kind)
    }

    /// Key used for textual deduplication within one compiled output
    pub fn dedup_key(&self) -> String {
        self.requirement.full_text()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.requirement)
    }
}
