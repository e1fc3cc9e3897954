//! Matrix constraint selectors
//!
//! A selector is the compiled form of a specific-group `match` mapping. It is
//! total over the global axis vocabulary: every axis carries an explicit rule,
//! either a required value or a wildcard, so matching never depends on
//! key-absence checks.

use super::{AxisTable, MatrixPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule for one axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisRule {
    /// Any value of the axis matches
    Any,
    /// Only the given value matches
    Equals(String),
}

/// Per-axis constraint within a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConstraint {
    /// Axis name
    pub axis: String,
    /// Matching rule for that axis
    pub rule: AxisRule,
}

/// A total constraint over the global axis vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    constraints: Vec<AxisConstraint>,
}

impl Selector {
    /// Creates a selector from per-axis constraints in axis declaration order
    pub fn new(constraints: Vec<AxisConstraint>) -> Self {
        Self { constraints }
    }

    /// Creates the always-matching selector: a wildcard for every global axis
    pub fn always(axes: &AxisTable) -> Self {
        Self {
            constraints: axes
                .iter()
                .map(|axis| AxisConstraint {
                    axis: axis.name.clone(),
                    rule: AxisRule::Any,
                })
                .collect(),
        }
    }

    /// Returns true if the matrix point satisfies every axis rule
    pub fn matches(&self, point: &MatrixPoint) -> bool {
        self.constraints.iter().all(|c| match &c.rule {
            AxisRule::Any => true,
            AxisRule::Equals(required) => point.value_of(&c.axis) == Some(required.as_str()),
        })
    }

    /// Returns true if every rule is a wildcard
    pub fn is_unconstrained(&self) -> bool {
        self.constraints
            .iter()
            .all(|c| matches!(c.rule, AxisRule::Any))
    }

    /// Iterates the per-axis constraints
    pub fn constraints(&self) -> impl Iterator<Item = &AxisConstraint> {
        self.constraints.iter()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let required: Vec<String> = self
            .constraints
            .iter()
            .filter_map(|c| match &c.rule {
                AxisRule::Any => None,
                AxisRule::Equals(value) => Some(format!("{}={}", c.axis, value)),
            })
            .collect();
        if required.is_empty() {
            write!(f, "any")
        } else {
            write!(f, "{}", required.join(", "))
        }
    }
}
