//! Packaging-metadata fragment emitter
//!
//! Renders an `[project.optional-dependencies]` TOML table keyed by the file
//! spec name. Requirement strings follow packaging conventions, markers
//! included, so every merged entry is expressible.

use toml::Value;

use crate::domain::{Entry, OutputKind};
use crate::emit::{EmitContext, ManifestEmitter, GENERATED_BANNER};
use crate::error::EmitError;

/// Emitter for packaging-metadata TOML fragments
pub struct PackagingEmitter;

impl ManifestEmitter for PackagingEmitter {
    fn kind(&self) -> OutputKind {
        OutputKind::PackagingMetadata
    }

    fn render(&self, ctx: &EmitContext<'_>, entries: &[Entry]) -> Result<String, EmitError> {
        let requirements: Vec<Value> = entries
            .iter()
            .map(|entry| Value::String(entry.requirement.full_text()))
            .collect();

        let mut extras = toml::map::Map::new();
        extras.insert(ctx.file.to_string(), Value::Array(requirements));

        let mut project = toml::map::Map::new();
        project.insert("optional-dependencies".to_string(), Value::Table(extras));

        let mut root = toml::map::Map::new();
        root.insert("project".to_string(), Value::Table(project));

        let body = toml::to_string(&Value::Table(root))
            .map_err(|e| EmitError::serialize(self.kind(), e.to_string()))?;

        Ok(format!("# {}\n{}", GENERATED_BANNER, body))
    }
}
