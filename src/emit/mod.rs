//! Manifest rendering for the supported output syntaxes
//!
//! This module provides:
//! - A `ManifestEmitter` trait with one implementation per output kind
//! - Deterministic output file naming that encodes the matrix point
//! - A shared generated-file banner

mod environment;
mod packaging;
mod requirements;

pub use environment::EnvironmentEmitter;
pub use packaging::PackagingEmitter;
pub use requirements::RequirementsEmitter;

use std::path::{Path, PathBuf};

use crate::domain::{Entry, MatrixPoint, OutputKind};
use crate::error::EmitError;

/// Banner placed at the top of every generated manifest
pub const GENERATED_BANNER: &str =
    "This file is generated by depmat. Edit the specification instead.";

/// Context shared by all emitters for one output
pub struct EmitContext<'a> {
    /// File spec name (used as the extras table key)
    pub file: &'a str,
    /// Output file stem, matrix point label included
    pub stem: &'a str,
    /// Channel list passed through from the specification
    pub channels: &'a [String],
}

/// Trait for rendering a merged entry list into one concrete syntax
pub trait ManifestEmitter {
    /// Returns the output kind this emitter handles
    fn kind(&self) -> OutputKind;

    /// Renders the manifest body, or fails with an `EmitError` when an entry
    /// cannot be expressed in this syntax; entries are never silently dropped
    fn render(&self, ctx: &EmitContext<'_>, entries: &[Entry]) -> Result<String, EmitError>;
}

/// Get the emitter for the specified output kind
pub fn emitter_for(kind: OutputKind) -> Box<dyn ManifestEmitter + Send + Sync> {
    match kind {
        OutputKind::Environment => Box::new(EnvironmentEmitter),
        OutputKind::RequirementList => Box::new(RequirementsEmitter),
        OutputKind::PackagingMetadata => Box::new(PackagingEmitter),
    }
}

/// Output file stem for a (file spec, matrix point) pair:
/// `<file>` when unconditional, `<file>_<label>` otherwise
pub fn output_stem(file: &str, point: &MatrixPoint) -> String {
    let label = point.label();
    if label.is_empty() {
        file.to_string()
    } else {
        format!("{}_{}", file, label)
    }
}

/// Full output path for a (file spec, matrix point, output kind) triple
pub fn output_path(dir: &Path, file: &str, point: &MatrixPoint, kind: OutputKind) -> PathBuf {
    dir.join(format!(
        "{}.{}",
        output_stem(file, point),
        kind.extension()
    ))
}
