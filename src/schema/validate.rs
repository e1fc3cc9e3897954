//! Validation of raw documents into the domain model
//!
//! Second parsing stage: cross-checks every reference against the global
//! vocabulary and compiles partial `match` mappings into total selectors.
//! Any failure here aborts the whole compilation before a single output
//! file is written.

use std::collections::HashSet;

use serde_yaml::Mapping;

use crate::domain::{
    Axis, AxisConstraint, AxisRule, AxisTable, DependencySet, Entry, FileSpec, Model, OutputKind,
    Requirement, Selector, SpecificGroup,
};
use crate::error::SchemaError;
use crate::schema::raw::{scalar_to_string, RawDocument, RawEntry, RawGroup};

/// Validates a raw document and builds the immutable model
pub fn validate(raw: RawDocument) -> Result<Model, SchemaError> {
    let axes = validate_axes(raw.axes)?;
    let sets = validate_sets(raw.sets, &axes)?;
    let files = validate_files(raw.files, &axes, &sets)?;

    Ok(Model {
        channels: raw.channels,
        axes,
        files,
        sets,
    })
}

fn validate_axes(raw: Vec<(String, Vec<String>)>) -> Result<AxisTable, SchemaError> {
    let mut table = AxisTable::new();
    for (name, values) in raw {
        if values.is_empty() {
            return Err(SchemaError::EmptyAxis { name });
        }
        table.push(Axis::new(name, values));
    }
    Ok(table)
}

fn validate_sets(
    raw: Vec<(String, crate::schema::raw::RawSet)>,
    axes: &AxisTable,
) -> Result<Vec<DependencySet>, SchemaError> {
    let mut sets = Vec::with_capacity(raw.len());
    for (name, raw_set) in raw {
        let common = validate_entries(raw_set.common, &format!("set '{}' common", name))?;
        let mut specific = Vec::with_capacity(raw_set.specific.len());
        for (index, group) in raw_set.specific.into_iter().enumerate() {
            specific.push(validate_group(group, axes, &name, index)?);
        }
        sets.push(DependencySet::new(name, common, specific));
    }
    Ok(sets)
}

fn validate_group(
    group: RawGroup,
    axes: &AxisTable,
    set: &str,
    index: usize,
) -> Result<SpecificGroup, SchemaError> {
    let selector = validate_selector(group.selector, axes, set)?;
    let entries = validate_entries(
        group.entries,
        &format!("set '{}' specific[{}]", set, index),
    )?;
    Ok(SpecificGroup::new(selector, entries))
}

/// Compiles a partial `match` mapping into a selector that is total over the
/// global axis vocabulary: named axes become Equals rules (or stay wildcards
/// on an explicit null), every other axis is a wildcard
fn validate_selector(
    mapping: Option<Mapping>,
    axes: &AxisTable,
    set: &str,
) -> Result<Selector, SchemaError> {
    let mut constraints: Vec<AxisConstraint> = axes
        .iter()
        .map(|axis| AxisConstraint {
            axis: axis.name.clone(),
            rule: AxisRule::Any,
        })
        .collect();

    let Some(mapping) = mapping else {
        return Ok(Selector::new(constraints));
    };

    let mut seen: HashSet<String> = HashSet::new();
    for (key, value) in mapping {
        let Some(axis) = scalar_to_string(&key) else {
            return Err(SchemaError::document(format!(
                "set '{}' has a non-scalar axis name in a match constraint",
                set
            )));
        };
        if !seen.insert(axis.clone()) {
            return Err(SchemaError::DuplicateMatchAxis {
                set: set.to_string(),
                axis,
            });
        }
        let Some(constraint) = constraints.iter_mut().find(|c| c.axis == axis) else {
            return Err(SchemaError::unknown_axis(format!("set '{}'", set), axis));
        };
        constraint.rule = match &value {
            serde_yaml::Value::Null => AxisRule::Any,
            other => match scalar_to_string(other) {
                Some(required) => AxisRule::Equals(required),
                None => {
                    return Err(SchemaError::document(format!(
                        "set '{}' match value for axis '{}' must be a scalar or null",
                        set, axis
                    )))
                }
            },
        };
    }

    Ok(Selector::new(constraints))
}

fn validate_entries(raw: Vec<RawEntry>, context: &str) -> Result<Vec<Entry>, SchemaError> {
    raw.into_iter()
        .map(|entry| validate_entry(entry, context))
        .collect()
}

fn validate_entry(raw: RawEntry, context: &str) -> Result<Entry, SchemaError> {
    match raw {
        RawEntry::Text(text) => Requirement::parse(&text)
            .map(Entry::unrestricted)
            .ok_or_else(|| SchemaError::invalid_requirement(context, text)),
        RawEntry::Detailed { package, outputs } => {
            let requirement = Requirement::parse(&package)
                .ok_or_else(|| SchemaError::invalid_requirement(context, &package))?;
            match outputs {
                None => Ok(Entry::unrestricted(requirement)),
                Some(kinds) => {
                    let kinds = kinds
                        .into_iter()
                        .map(|value| {
                            OutputKind::parse(&value)
                                .ok_or_else(|| SchemaError::unknown_output_kind(context, value))
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Entry::restricted(requirement, kinds))
                }
            }
        }
    }
}

fn validate_files(
    raw: Vec<(String, crate::schema::raw::RawFile)>,
    axes: &AxisTable,
    sets: &[DependencySet],
) -> Result<Vec<FileSpec>, SchemaError> {
    let mut files = Vec::with_capacity(raw.len());
    for (name, raw_file) in raw {
        let context = format!("file spec '{}'", name);

        let outputs = raw_file
            .output
            .into_vec()
            .into_iter()
            .map(|value| {
                OutputKind::parse(&value)
                    .ok_or_else(|| SchemaError::unknown_output_kind(&context, value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for axis in &raw_file.matrix {
            if !axes.contains(axis) {
                return Err(SchemaError::unknown_axis(&context, axis));
            }
        }

        for include in &raw_file.includes {
            if !sets.iter().any(|s| &s.name == include) {
                return Err(SchemaError::undeclared_set(&name, include));
            }
        }

        files.push(FileSpec::new(
            name,
            outputs,
            raw_file.matrix,
            raw_file.includes,
        ));
    }
    Ok(files)
}
