//! File spec structures

use super::OutputKind;
use serde::{Deserialize, Serialize};

/// A named output target: which sets to include, which axes to vary over,
/// and which concrete syntaxes to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// File spec name, used as the output file stem and extras table key
    pub name: String,
    /// Output kinds to render, in declaration order
    pub outputs: Vec<OutputKind>,
    /// Axis names this file varies over; empty means one unconditional output
    pub matrix: Vec<String>,
    /// Dependency set names to include, in order; earlier includes emit first
    pub includes: Vec<String>,
}

impl FileSpec {
    /// Creates a new file spec
    pub fn new(
        name: impl Into<String>,
        outputs: Vec<OutputKind>,
        matrix: Vec<String>,
        includes: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            outputs,
            matrix,
            includes,
        }
    }

    /// Returns true if this file varies over the given axis
    pub fn varies_over(&self, axis: &str) -> bool {
        self.matrix.iter().any(|a| a == axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_spec_new() {
        let spec = FileSpec::new(
            "all",
            vec![OutputKind::Environment],
            vec!["cuda".to_string()],
            vec!["build".to_string(), "test".to_string()],
        );
        assert_eq!(spec.name, "all");
        assert_eq!(spec.outputs, vec![OutputKind::Environment]);
        assert_eq!(spec.includes, vec!["build", "test"]);
    }

    #[test]
    fn test_varies_over() {
        let spec = FileSpec::new(
            "all",
            vec![OutputKind::Environment],
            vec!["cuda".to_string()],
            Vec::new(),
        );
        assert!(spec.varies_over("cuda"));
        assert!(!spec.varies_over("arch"));
    }

    #[test]
    fn test_no_matrix_no_includes() {
        let spec = FileSpec::new("minimal", vec![OutputKind::RequirementList], Vec::new(), Vec::new());
        assert!(spec.matrix.is_empty());
        assert!(spec.includes.is_empty());
    }
}
