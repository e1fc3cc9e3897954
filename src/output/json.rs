//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of compile results
//! - Structured per-output information with matrix points and paths

use crate::orchestrator::CompileOutcome;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-output results
    outputs: Vec<JsonFileOutput>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Total number of outputs compiled
    outputs: usize,
    /// Number of outputs written to disk
    written: usize,
    /// Number of file specs covered
    file_specs: usize,
}

/// JSON representation of one generated manifest
#[derive(Serialize)]
struct JsonFileOutput {
    /// File spec name
    file: String,
    /// Output kind
    kind: String,
    /// Matrix point (empty when unconditional)
    point: String,
    /// Generated manifest path
    path: String,
    /// Number of packages in the merged list (verbose mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    packages: Option<usize>,
    /// Whether the file was written
    written: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &CompileOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let verbose = self.verbosity == Verbosity::Verbose;
        let summary = &outcome.summary;

        let outputs: Vec<JsonFileOutput> = summary
            .outputs
            .iter()
            .map(|output| JsonFileOutput {
                file: output.file.clone(),
                kind: output.kind.as_str().to_string(),
                point: output.point.clone(),
                path: output.path.display().to_string(),
                packages: verbose.then_some(output.package_count),
                written: output.written,
            })
            .collect();

        let json_output = JsonOutput {
            dry_run: summary.dry_run,
            summary: JsonSummary {
                outputs: summary.total_outputs(),
                written: summary.outputs_written(),
                file_specs: summary.file_names().len(),
            },
            outputs,
            errors: outcome.errors.iter().map(|e| e.to_string()).collect(),
        };

        let rendered = serde_json::to_string_pretty(&json_output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{}", rendered)
    }
}
