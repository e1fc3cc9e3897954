//! Conda-style environment file emitter
//!
//! Renders a merged entry list as an environment definition: name, the
//! passthrough channel list, and the dependency list. Environment syntax has
//! no equivalent of pip-style markers, so entries carrying one are reported
//! as emit errors rather than dropped.

use serde::Serialize;

use crate::domain::{Entry, OutputKind};
use crate::emit::{EmitContext, ManifestEmitter, GENERATED_BANNER};
use crate::error::EmitError;

/// Emitter for conda-style environment YAML
pub struct EnvironmentEmitter;

#[derive(Serialize)]
struct Environment<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "no_channels")]
    channels: &'a [String],
    dependencies: Vec<String>,
}

fn no_channels(channels: &&[String]) -> bool {
    channels.is_empty()
}

impl ManifestEmitter for EnvironmentEmitter {
    fn kind(&self) -> OutputKind {
        OutputKind::Environment
    }

    fn render(&self, ctx: &EmitContext<'_>, entries: &[Entry]) -> Result<String, EmitError> {
        let mut dependencies = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(marker) = &entry.requirement.marker {
                return Err(EmitError::marker_unsupported(
                    &entry.requirement.name,
                    marker,
                    self.kind(),
                ));
            }
            dependencies.push(entry.requirement.spec_text());
        }

        let environment = Environment {
            name: ctx.stem,
            channels: ctx.channels,
            dependencies,
        };
        let body = serde_yaml::to_string(&environment)
            .map_err(|e| EmitError::serialize(self.kind(), e.to_string()))?;

        Ok(format!("# {}\n{}", GENERATED_BANNER, body))
    }
}
