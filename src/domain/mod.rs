//! Core domain models for depmat
//!
//! This module contains the fundamental types used throughout the compiler:
//! - Output kinds for the supported manifest syntaxes
//! - Package entries with requirement text and output-type restrictions
//! - Build axes, matrix points and selectors
//! - Dependency sets and file specs forming the immutable model
//! - Summary and result structures

mod axis;
mod dependency_set;
mod entry;
mod file_spec;
mod matrix_point;
mod model;
mod output_kind;
mod selector;
mod summary;

pub use axis::{Axis, AxisTable};
pub use dependency_set::{DependencySet, SpecificGroup};
pub use entry::{Entry, OutputRestriction, Requirement};
pub use file_spec::FileSpec;
pub use matrix_point::{Coord, MatrixPoint};
pub use model::Model;
pub use output_kind::OutputKind;
pub use selector::{AxisConstraint, AxisRule, Selector};
pub use summary::{CompileSummary, FileCompileResult};
