//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file-spec listing of generated manifests with colors
//! - Matrix point display in verbose mode
//! - Dry-run prefix and summary line
//! - Error listing for partially failed compilations

use crate::orchestrator::CompileOutcome;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    /// Format one package count for display
    fn package_count(&self, count: usize) -> String {
        let text = if count == 1 {
            "1 package".to_string()
        } else {
            format!("{} packages", count)
        };
        if self.color {
            text.dimmed().to_string()
        } else {
            text
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &CompileOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            // Quiet mode reports errors only
            for error in &outcome.errors {
                writeln!(writer, "{}", error)?;
            }
            return Ok(());
        }

        let summary = &outcome.summary;

        for file in summary.file_names() {
            let heading = if self.color {
                file.bold().to_string()
            } else {
                file.to_string()
            };
            writeln!(writer, "{}{}", self.dry_run_prefix(), heading)?;

            for output in summary.by_file(file) {
                let path = output.path.display().to_string();
                let path_display = if self.color {
                    path.green().to_string()
                } else {
                    path
                };

                if self.verbosity == Verbosity::Verbose {
                    let point = if output.point.is_empty() {
                        "unconditional".to_string()
                    } else {
                        output.point.clone()
                    };
                    writeln!(
                        writer,
                        "  {}  [{}]  {}",
                        path_display,
                        point,
                        self.package_count(output.package_count)
                    )?;
                } else {
                    writeln!(writer, "  {}", path_display)?;
                }
            }
        }

        if !outcome.errors.is_empty() {
            writeln!(writer)?;
            let heading = if self.color {
                "Errors:".red().bold().to_string()
            } else {
                "Errors:".to_string()
            };
            writeln!(writer, "{}", heading)?;
            for error in &outcome.errors {
                writeln!(writer, "  {}", error)?;
            }
        }

        writeln!(writer)?;
        let verb = if self.dry_run { "resolved" } else { "wrote" };
        writeln!(
            writer,
            "{}{} {} manifest(s) for {} file spec(s)",
            self.dry_run_prefix(),
            verb,
            summary.total_outputs(),
            summary.file_names().len()
        )?;

        Ok(())
    }
}
