//! Matrix point structures
//!
//! A matrix point assigns one value to every global axis. Axes the active
//! file spec does not vary over are pinned to their default value; only the
//! varied coordinates participate in output file naming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One axis assignment within a matrix point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    /// Axis name
    pub axis: String,
    /// Assigned value
    pub value: String,
    /// Whether the active file spec varies over this axis
    pub varied: bool,
}

/// A full assignment of one value per global axis, in axis declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixPoint {
    coords: Vec<Coord>,
}

impl MatrixPoint {
    /// Creates a matrix point from coordinates already in axis declaration order
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Creates the empty point of a zero-axis matrix
    pub fn unconditional() -> Self {
        Self { coords: Vec::new() }
    }

    /// Returns the assigned value for an axis, if the axis exists
    pub fn value_of(&self, axis: &str) -> Option<&str> {
        self.coords
            .iter()
            .find(|c| c.axis == axis)
            .map(|c| c.value.as_str())
    }

    /// Iterates all coordinates in axis declaration order
    pub fn coords(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter()
    }

    /// Iterates only the coordinates the file spec varies over
    pub fn varied_coords(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter().filter(|c| c.varied)
    }

    /// Returns true if no axis is varied (a single unconditional output)
    pub fn is_unconditional(&self) -> bool {
        !self.coords.iter().any(|c| c.varied)
    }

    /// Deterministic file-name fragment encoding the varied coordinates,
    /// e.g. `cuda-11.8_arch-x86_64`; empty for an unconditional point
    pub fn label(&self) -> String {
        self.varied_coords()
            .map(|c| format!("{}-{}", sanitize(&c.axis), sanitize(&c.value)))
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for MatrixPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconditional() {
            return write!(f, "unconditional");
        }
        let parts: Vec<String> = self
            .varied_coords()
            .map(|c| format!("{}={}", c.axis, c.value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Keeps `[A-Za-z0-9._-]` verbatim, replaces anything else with `_`
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> MatrixPoint {
        MatrixPoint::new(vec![
            Coord {
                axis: "cuda".to_string(),
                value: "11.8".to_string(),
                varied: true,
            },
            Coord {
                axis: "arch".to_string(),
                value: "x86_64".to_string(),
                varied: true,
            },
            Coord {
                axis: "py".to_string(),
                value: "3.10".to_string(),
                varied: false,
            },
        ])
    }

    #[test]
    fn test_value_of() {
        let point = sample_point();
        assert_eq!(point.value_of("cuda"), Some("11.8"));
        assert_eq!(point.value_of("py"), Some("3.10"));
        assert_eq!(point.value_of("os"), None);
    }

    #[test]
    fn test_varied_coords_excludes_pinned() {
        let point = sample_point();
        let varied: Vec<_> = point.varied_coords().map(|c| c.axis.as_str()).collect();
        assert_eq!(varied, vec!["cuda", "arch"]);
    }

    #[test]
    fn test_label_encodes_varied_only() {
        assert_eq!(sample_point().label(), "cuda-11.8_arch-x86_64");
    }

    #[test]
    fn test_label_sanitizes_values() {
        let point = MatrixPoint::new(vec![Coord {
            axis: "py".to_string(),
            value: "3.10 beta".to_string(),
            varied: true,
        }]);
        assert_eq!(point.label(), "py-3.10_beta");
    }

    #[test]
    fn test_unconditional_point() {
        let point = MatrixPoint::unconditional();
        assert!(point.is_unconditional());
        assert_eq!(point.label(), "");
        assert_eq!(format!("{}", point), "unconditional");
    }

    #[test]
    fn test_fully_pinned_point_is_unconditional() {
        let point = MatrixPoint::new(vec![Coord {
            axis: "cuda".to_string(),
            value: "11.8".to_string(),
            varied: false,
        }]);
        assert!(point.is_unconditional());
        assert_eq!(point.label(), "");
    }

    #[test]
    fn test_display_lists_varied_assignments() {
        assert_eq!(format!("{}", sample_point()), "cuda=11.8, arch=x86_64");
    }

    #[test]
    fn test_labels_distinct_across_values() {
        let a = MatrixPoint::new(vec![Coord {
            axis: "cuda".to_string(),
            value: "11.8".to_string(),
            varied: true,
        }]);
        let b = MatrixPoint::new(vec![Coord {
            axis: "cuda".to_string(),
            value: "12.0".to_string(),
            varied: true,
        }]);
        assert_ne!(a.label(), b.label());
    }
}
