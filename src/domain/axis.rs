//! Build axis definitions
//!
//! An axis is one dimension of the build matrix (e.g. CUDA version). The
//! declaration order of axes, and of values within an axis, is an observable
//! contract: matrix expansion and output file naming follow it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named build dimension with an ordered list of legal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis name (e.g. `cuda`)
    pub name: String,
    /// Legal values in declaration order, never empty
    pub values: Vec<String>,
}

impl Axis {
    /// Creates a new axis
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the canonical default value: the first declared one
    pub fn default_value(&self) -> &str {
        &self.values[0]
    }

    /// Returns true if the given value is legal for this axis
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.values.join(", "))
    }
}

/// The global axis vocabulary, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTable {
    axes: Vec<Axis>,
}

impl AxisTable {
    /// Creates an empty axis table
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }

    /// Creates a table from axes already in declaration order
    pub fn from_axes(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    /// Appends an axis, preserving declaration order
    pub fn push(&mut self, axis: Axis) {
        self.axes.push(axis);
    }

    /// Looks up an axis by name
    pub fn get(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Returns true if an axis with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates axes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    /// Returns the number of declared axes
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns true if no axes are declared
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuda_axis() -> Axis {
        Axis::new("cuda", vec!["11.8".to_string(), "12.0".to_string()])
    }

    #[test]
    fn test_axis_new() {
        let axis = cuda_axis();
        assert_eq!(axis.name, "cuda");
        assert_eq!(axis.values, vec!["11.8", "12.0"]);
    }

    #[test]
    fn test_axis_default_value() {
        assert_eq!(cuda_axis().default_value(), "11.8");
    }

    #[test]
    fn test_axis_has_value() {
        let axis = cuda_axis();
        assert!(axis.has_value("11.8"));
        assert!(axis.has_value("12.0"));
        assert!(!axis.has_value("12.2"));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(format!("{}", cuda_axis()), "cuda [11.8, 12.0]");
    }

    #[test]
    fn test_table_get_and_contains() {
        let mut table = AxisTable::new();
        table.push(cuda_axis());
        table.push(Axis::new("arch", vec!["x86_64".to_string()]));

        assert!(table.contains("cuda"));
        assert!(table.contains("arch"));
        assert!(!table.contains("python"));
        assert_eq!(table.get("cuda").unwrap().values.len(), 2);
    }

    #[test]
    fn test_table_preserves_declaration_order() {
        let table = AxisTable::from_axes(vec![
            Axis::new("cuda", vec!["11.8".to_string()]),
            Axis::new("arch", vec!["x86_64".to_string()]),
            Axis::new("py", vec!["3.10".to_string()]),
        ]);
        let names: Vec<_> = table.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["cuda", "arch", "py"]);
    }

    #[test]
    fn test_table_len_and_empty() {
        let table = AxisTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);

        let table = AxisTable::from_axes(vec![cuda_axis()]);
        assert!(!table.is_empty());
        assert_eq!(table.len(), 1);
    }
}
