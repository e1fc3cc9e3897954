//! Compilation result summary types
//!
//! Provides structures for tracking emitted outputs at file and overall levels.

use super::OutputKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of compiling one (file spec, matrix point, output kind) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCompileResult {
    /// Name of the file spec this output belongs to
    pub file: String,
    /// Output kind rendered
    pub kind: OutputKind,
    /// Human-readable matrix point description (empty when unconditional)
    pub point: String,
    /// Path of the generated manifest
    pub path: PathBuf,
    /// Number of packages in the merged, deduplicated list
    pub package_count: usize,
    /// Whether the file was actually written (false in dry-run mode)
    pub written: bool,
}

/// Overall summary of one compiler invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileSummary {
    /// Results in deterministic job order
    pub outputs: Vec<FileCompileResult>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl CompileSummary {
    /// Creates a new CompileSummary
    pub fn new(dry_run: bool) -> Self {
        Self {
            outputs: Vec::new(),
            dry_run,
        }
    }

    /// Adds one output result
    pub fn add_output(&mut self, result: FileCompileResult) {
        self.outputs.push(result);
    }

    /// Returns the total number of outputs compiled
    pub fn total_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Returns the number of outputs actually written to disk
    pub fn outputs_written(&self) -> usize {
        self.outputs.iter().filter(|o| o.written).count()
    }

    /// Returns the total number of packages across all outputs
    pub fn total_packages(&self) -> usize {
        self.outputs.iter().map(|o| o.package_count).sum()
    }

    /// Returns the distinct file spec names in first-seen order
    pub fn file_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for output in &self.outputs {
            if !names.contains(&output.file.as_str()) {
                names.push(&output.file);
            }
        }
        names
    }

    /// Returns outputs belonging to one file spec
    pub fn by_file<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FileCompileResult> {
        self.outputs.iter().filter(move |o| o.file == name)
    }

    /// Returns true if anything was written
    pub fn has_written(&self) -> bool {
        self.outputs_written() > 0
    }
}

impl Default for CompileSummary {
    fn default() -> Self {
        Self::new(false)
    }
}
