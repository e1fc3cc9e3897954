//! Dependency set structures

use super::{Entry, MatrixPoint, Selector};
use serde::{Deserialize, Serialize};

/// A matrix-conditional group of entries within a dependency set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificGroup {
    /// Constraint deciding whether the group applies to a matrix point
    pub selector: Selector,
    /// Entries contributed when the selector matches, in declaration order
    pub entries: Vec<Entry>,
}

impl SpecificGroup {
    /// Creates a new specific group
    pub fn new(selector: Selector, entries: Vec<Entry>) -> Self {
        Self { selector, entries }
    }

    /// Returns true if this group applies to the given matrix point
    pub fn applies_to(&self, point: &MatrixPoint) -> bool {
        self.selector.matches(point)
    }
}

/// A named, reusable group of packages: unconditional plus matrix-conditional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    /// Set name, referenced from file spec include lists
    pub name: String,
    /// Unconditional entries, in declaration order
    pub common: Vec<Entry>,
    /// Matrix-conditional groups, in declaration order
    pub specific: Vec<SpecificGroup>,
}

impl DependencySet {
    /// Creates a new dependency set
    pub fn new(name: impl Into<String>, common: Vec<Entry>, specific: Vec<SpecificGroup>) -> Self {
        Self {
            name: name.into(),
            common,
            specific,
        }
    }

    /// Iterates every specific group that applies to the given matrix point,
    /// in declaration order; all matching groups contribute
    pub fn matching_groups<'a>(
        &'a self,
        point: &'a MatrixPoint,
    ) -> impl Iterator<Item = &'a SpecificGroup> {
        self.specific.iter().filter(move |g| g.applies_to(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Axis, AxisConstraint, AxisRule, AxisTable, Coord, Requirement};

    fn axes() -> AxisTable {
        AxisTable::from_axes(vec![Axis::new(
            "cuda",
            vec!["11.8".to_string(), "12.0".to_string()],
        )])
    }

    fn cuda_point(value: &str) -> MatrixPoint {
        MatrixPoint::new(vec![Coord {
            axis: "cuda".to_string(),
            value: value.to_string(),
            varied: true,
        }])
    }

    fn cuda_group(value: &str, package: &str) -> SpecificGroup {
        SpecificGroup::new(
            Selector::new(vec![AxisConstraint {
                axis: "cuda".to_string(),
                rule: AxisRule::Equals(value.to_string()),
            }]),
            vec![Entry::unrestricted(Requirement::bare(package))],
        )
    }

    #[test]
    fn test_group_applies_to() {
        let group = cuda_group("11.8", "nvcc-11");
        assert!(group.applies_to(&cuda_point("11.8")));
        assert!(!group.applies_to(&cuda_point("12.0")));
    }

    #[test]
    fn test_matching_groups_in_declaration_order() {
        let set = DependencySet::new(
            "build",
            vec![Entry::unrestricted(Requirement::bare("cmake"))],
            vec![
                cuda_group("11.8", "nvcc-11"),
                SpecificGroup::new(
                    Selector::always(&axes()),
                    vec![Entry::unrestricted(Requirement::bare("ninja"))],
                ),
                cuda_group("12.0", "nvcc-12"),
            ],
        );

        // Both the cuda=11.8 group and the unconstrained group match, in order
        let point = cuda_point("11.8");
        let matched: Vec<_> = set
            .matching_groups(&point)
            .flat_map(|g| g.entries.iter())
            .map(|e| e.requirement.name.as_str())
            .collect();
        assert_eq!(matched, vec!["nvcc-11", "ninja"]);
    }

    #[test]
    fn test_no_matching_groups() {
        let set = DependencySet::new("build", Vec::new(), vec![cuda_group("11.8", "nvcc-11")]);
        assert_eq!(set.matching_groups(&cuda_point("12.0")).count(), 0);
    }
}
