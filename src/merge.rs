//! Dependency set merging
//!
//! Resolves the ordered package list for one (file spec, matrix point,
//! output kind) combination: walk the include list in order, emit each set's
//! common entries, then every matching specific group's entries, filter by
//! output kind, and drop textually identical later duplicates.

use std::collections::HashSet;

use crate::domain::{Entry, FileSpec, MatrixPoint, Model, OutputKind};
use crate::error::SchemaError;

/// Merges the entry list for a file spec at one matrix point.
///
/// Ordering is the declaration order of the include list, and within a set
/// the common entries followed by matching specific groups in group order.
/// Deduplication is textual (name + constraint + marker); the first
/// occurrence wins and keeps its position. Validation guarantees every
/// include resolves, so the error path is unreachable on a validated model.
pub fn merge(
    model: &Model,
    file: &FileSpec,
    point: &MatrixPoint,
    kind: OutputKind,
) -> Result<Vec<Entry>, SchemaError> {
    let mut merged: Vec<Entry> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for set_name in &file.includes {
        let set = model
            .set(set_name)
            .ok_or_else(|| SchemaError::undeclared_set(&file.name, set_name))?;

        let common = set.common.iter();
        let specific = set
            .matching_groups(point)
            .flat_map(|group| group.entries.iter());

        for entry in common.chain(specific) {
            if !entry.applies_to(kind) {
                continue;
            }
            if seen.insert(entry.dedup_key()) {
                merged.push(entry.clone());
            }
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Axis, AxisConstraint, AxisRule, AxisTable, DependencySet, Requirement, Selector,
        SpecificGroup,
    };
    use crate::matrix::expand;

    fn entry(text: &str) -> Entry {
        Entry::unrestricted(Requirement::parse(text).unwrap())
    }

    fn restricted_entry(text: &str, kinds: Vec<OutputKind>) -> Entry {
        Entry::restricted(Requirement::parse(text).unwrap(), kinds)
    }

    fn cuda_axes() -> AxisTable {
        AxisTable::from_axes(vec![Axis::new(
            "cuda",
            vec!["11.8".to_string(), "12.0".to_string()],
        )])
    }

    fn cuda_group(value: &str, entries: Vec<Entry>) -> SpecificGroup {
        SpecificGroup::new(
            Selector::new(vec![AxisConstraint {
                axis: "cuda".to_string(),
                rule: AxisRule::Equals(value.to_string()),
            }]),
            entries,
        )
    }

    fn file(includes: &[&str], matrix: &[&str]) -> FileSpec {
        FileSpec::new(
            "all",
            vec![OutputKind::Environment],
            matrix.iter().map(|s| s.to_string()).collect(),
            includes.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.requirement.name.as_str()).collect()
    }

    #[test]
    fn test_include_order_determines_package_order() {
        let model = Model {
            channels: Vec::new(),
            axes: AxisTable::new(),
            files: Vec::new(),
            sets: vec![
                DependencySet::new("s1", vec![entry("p1"), entry("p2")], Vec::new()),
                DependencySet::new("s2", vec![entry("p3")], Vec::new()),
            ],
        };

        let merged = merge(
            &model,
            &file(&["s1", "s2"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_dedup_same_set_included_twice() {
        let model = Model {
            channels: Vec::new(),
            axes: AxisTable::new(),
            files: Vec::new(),
            sets: vec![DependencySet::new("s1", vec![entry("numpy>=1.21")], Vec::new())],
        };

        let merged = merge(
            &model,
            &file(&["s1", "s1"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["numpy"]);
    }

    #[test]
    fn test_dedup_across_sets_first_occurrence_wins() {
        let model = Model {
            channels: Vec::new(),
            axes: AxisTable::new(),
            files: Vec::new(),
            sets: vec![
                DependencySet::new("s1", vec![entry("cmake"), entry("numpy>=1.21")], Vec::new()),
                DependencySet::new("s2", vec![entry("numpy>=1.21"), entry("ninja")], Vec::new()),
            ],
        };

        let merged = merge(
            &model,
            &file(&["s1", "s2"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap();
        // numpy stays at its first position, the later duplicate is dropped
        assert_eq!(names(&merged), vec!["cmake", "numpy", "ninja"]);
    }

    #[test]
    fn test_different_constraints_are_not_duplicates() {
        let model = Model {
            channels: Vec::new(),
            axes: AxisTable::new(),
            files: Vec::new(),
            sets: vec![
                DependencySet::new("s1", vec![entry("numpy>=1.21")], Vec::new()),
                DependencySet::new("s2", vec![entry("numpy>=1.22")], Vec::new()),
            ],
        };

        let merged = merge(
            &model,
            &file(&["s1", "s2"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap();
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_specific_entries_follow_common() {
        let axes = cuda_axes();
        let model = Model {
            channels: Vec::new(),
            axes: axes.clone(),
            files: Vec::new(),
            sets: vec![DependencySet::new(
                "build",
                vec![entry("cmake")],
                vec![
                    cuda_group("11.8", vec![entry("nvcc-11")]),
                    cuda_group("12.0", vec![entry("nvcc-12")]),
                ],
            )],
        };

        let points = expand(&axes, &["cuda".to_string()]);
        let merged = merge(
            &model,
            &file(&["build"], &["cuda"]),
            &points[0],
            OutputKind::Environment,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["cmake", "nvcc-11"]);

        let merged = merge(
            &model,
            &file(&["build"], &["cuda"]),
            &points[1],
            OutputKind::Environment,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["cmake", "nvcc-12"]);
    }

    #[test]
    fn test_all_matching_groups_contribute() {
        let axes = cuda_axes();
        let model = Model {
            channels: Vec::new(),
            axes: axes.clone(),
            files: Vec::new(),
            sets: vec![DependencySet::new(
                "build",
                Vec::new(),
                vec![
                    cuda_group("11.8", vec![entry("nvcc-11")]),
                    SpecificGroup::new(Selector::always(&axes), vec![entry("sccache")]),
                ],
            )],
        };

        let points = expand(&axes, &["cuda".to_string()]);
        let merged = merge(
            &model,
            &file(&["build"], &["cuda"]),
            &points[0],
            OutputKind::Environment,
        )
        .unwrap();
        // No first-match short-circuit: both groups emit, in declaration order
        assert_eq!(names(&merged), vec!["nvcc-11", "sccache"]);
    }

    #[test]
    fn test_output_kind_filtering() {
        let model = Model {
            channels: Vec::new(),
            axes: AxisTable::new(),
            files: Vec::new(),
            sets: vec![DependencySet::new(
                "docs",
                vec![
                    entry("sphinx"),
                    restricted_entry("build-backend", vec![OutputKind::PackagingMetadata]),
                ],
                Vec::new(),
            )],
        };

        let merged = merge(
            &model,
            &file(&["docs"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::RequirementList,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["sphinx"]);

        let merged = merge(
            &model,
            &file(&["docs"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::PackagingMetadata,
        )
        .unwrap();
        assert_eq!(names(&merged), vec!["sphinx", "build-backend"]);
    }

    #[test]
    fn test_empty_includes_merge_to_empty_list() {
        let model = Model::default();
        let merged = merge(
            &model,
            &file(&[], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_undeclared_set_is_an_error() {
        let model = Model::default();
        let err = merge(
            &model,
            &file(&["ghost"], &[]),
            &MatrixPoint::unconditional(),
            OutputKind::Environment,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::UndeclaredSet { .. }));
    }
}
