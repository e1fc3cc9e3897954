//! Plain requirement list emitter
//!
//! Renders one requirement per line. Markers are part of the requirement
//! syntax here, so every merged entry is expressible.

use crate::domain::{Entry, OutputKind};
use crate::emit::{EmitContext, ManifestEmitter, GENERATED_BANNER};
use crate::error::EmitError;

/// Emitter for newline-delimited requirement lists
pub struct RequirementsEmitter;

impl ManifestEmitter for RequirementsEmitter {
    fn kind(&self) -> OutputKind {
        OutputKind::RequirementList
    }

    fn render(&self, _ctx: &EmitContext<'_>, entries: &[Entry]) -> Result<String, EmitError> {
        let mut body = String::new();
        body.push_str(&format!("# {}\n", GENERATED_BANNER));
        for entry in entries {
            body.push_str(&entry.requirement.full_text());
            body.push('\n');
        }
        Ok(body)
    }
}
