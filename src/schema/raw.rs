//! Raw specification document structures
//!
//! First parsing stage: the YAML text is walked into loosely-typed raw
//! structures that preserve declaration order everywhere it matters. The
//! top-level name tables (`axes`, `files`, `sets`) are iterated as ordered
//! mappings rather than collected into hash maps, so duplicate names are
//! detected instead of silently overwriting. Validation into the domain
//! model happens in a second stage.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::SchemaError;

/// One entry in its raw form: a bare requirement string or the long form
/// with an explicit output restriction
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// `- numpy>=1.21`
    Text(String),
    /// `- {package: pip, outputs: [requirement-list]}`
    Detailed {
        package: String,
        #[serde(default)]
        outputs: Option<Vec<String>>,
    },
}

/// A value that may be written as one item or a list of items
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Normalizes to a list
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// Raw body of one file spec
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    /// Output kind or list of kinds
    pub output: OneOrMany<String>,
    /// Axis names this file varies over
    #[serde(default)]
    pub matrix: Vec<String>,
    /// Dependency set names to include, in order
    #[serde(default)]
    pub includes: Vec<String>,
}

/// Raw body of one specific group
#[derive(Debug, Clone, Deserialize)]
pub struct RawGroup {
    /// Partial matrix constraint; absent or empty means always-match
    #[serde(rename = "match", default)]
    pub selector: Option<Mapping>,
    /// Entries contributed when the constraint matches
    pub entries: Vec<RawEntry>,
}

/// Raw body of one dependency set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSet {
    /// Unconditional entries
    #[serde(default)]
    pub common: Vec<RawEntry>,
    /// Matrix-conditional groups
    #[serde(default)]
    pub specific: Vec<RawGroup>,
}

/// The whole document in raw form, declaration order preserved
#[derive(Debug, Clone, Default)]
pub struct RawDocument {
    /// Channel list passed through into environment outputs
    pub channels: Vec<String>,
    /// Global axes: name to ordered value list
    pub axes: Vec<(String, Vec<String>)>,
    /// Named file specs
    pub files: Vec<(String, RawFile)>,
    /// Named dependency sets
    pub sets: Vec<(String, RawSet)>,
}

impl RawDocument {
    /// Parses the specification text into the raw document form
    pub fn parse(text: &str) -> Result<Self, SchemaError> {
        let root: Value =
            serde_yaml::from_str(text).map_err(|e| SchemaError::document(e.to_string()))?;
        let Value::Mapping(root) = root else {
            return Err(SchemaError::document("top level must be a mapping"));
        };

        let mut doc = RawDocument::default();

        for (key, value) in root {
            let Some(key) = scalar_to_string(&key) else {
                return Err(SchemaError::document("top-level keys must be scalars"));
            };
            match key.as_str() {
                "channels" => doc.channels = string_list(&value, "channels")?,
                "axes" => doc.axes = parse_axes(value)?,
                "files" => doc.files = parse_files(value)?,
                "sets" => doc.sets = parse_sets(value)?,
                // Unrecognized top-level keys are opaque configuration for
                // surrounding tooling and pass through untouched
                _ => {}
            }
        }

        Ok(doc)
    }
}

fn parse_axes(value: Value) -> Result<Vec<(String, Vec<String>)>, SchemaError> {
    let mapping = expect_mapping(value, "axes")?;
    let mut axes: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in mapping {
        let Some(name) = scalar_to_string(&key) else {
            return Err(SchemaError::document("axis names must be scalars"));
        };
        if axes.iter().any(|(n, _)| n == &name) {
            return Err(SchemaError::DuplicateAxis { name });
        }
        let values = string_list(&value, &format!("axis '{}'", name))?;
        axes.push((name, values));
    }
    Ok(axes)
}

fn parse_files(value: Value) -> Result<Vec<(String, RawFile)>, SchemaError> {
    let mapping = expect_mapping(value, "files")?;
    let mut files: Vec<(String, RawFile)> = Vec::new();
    for (key, value) in mapping {
        let Some(name) = scalar_to_string(&key) else {
            return Err(SchemaError::document("file spec names must be scalars"));
        };
        if files.iter().any(|(n, _)| n == &name) {
            return Err(SchemaError::DuplicateFile { name });
        }
        let file: RawFile = serde_yaml::from_value(value)
            .map_err(|e| SchemaError::document(format!("file spec '{}': {}", name, e)))?;
        files.push((name, file));
    }
    Ok(files)
}

fn parse_sets(value: Value) -> Result<Vec<(String, RawSet)>, SchemaError> {
    let mapping = expect_mapping(value, "sets")?;
    let mut sets: Vec<(String, RawSet)> = Vec::new();
    for (key, value) in mapping {
        let Some(name) = scalar_to_string(&key) else {
            return Err(SchemaError::document("set names must be scalars"));
        };
        if sets.iter().any(|(n, _)| n == &name) {
            return Err(SchemaError::DuplicateSet { name });
        }
        let set: RawSet = serde_yaml::from_value(value)
            .map_err(|e| SchemaError::document(format!("set '{}': {}", name, e)))?;
        sets.push((name, set));
    }
    Ok(sets)
}

fn expect_mapping(value: Value, context: &str) -> Result<Mapping, SchemaError> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(SchemaError::document(format!(
            "'{}' must be a mapping",
            context
        ))),
    }
}

fn string_list(value: &Value, context: &str) -> Result<Vec<String>, SchemaError> {
    let Value::Sequence(items) = value else {
        return Err(SchemaError::document(format!(
            "'{}' must be a list",
            context
        )));
    };
    items
        .iter()
        .map(|item| {
            scalar_to_string(item).ok_or_else(|| {
                SchemaError::document(format!("'{}' entries must be scalars", context))
            })
        })
        .collect()
}

/// Coerces YAML scalars to strings so unquoted numbers (`12.0`) behave like
/// their quoted spellings
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
