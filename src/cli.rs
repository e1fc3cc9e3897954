//! CLI argument parsing module for depmat

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Dependency matrix compiler
#[derive(Parser, Debug, Clone)]
#[command(name = "depmat", version, about = "Dependency matrix compiler")]
pub struct CliArgs {
    /// Path to the specification document
    #[arg(default_value = "dependencies.yaml")]
    pub spec: PathBuf,

    /// Directory where generated manifests are written
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Compile only the named file specs (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub file: Vec<String>,

    // General options
    /// Dry run mode - resolve and render without writing files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// List the output paths that would be generated, without compiling
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Check if any file spec filter is specified
    pub fn has_file_filter(&self) -> bool {
        !self.file.is_empty()
    }

    /// Check if a file spec should be compiled based on filters
    pub fn should_compile_file(&self, name: &str) -> bool {
        !self.has_file_filter() || self.file.iter().any(|f| f == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["depmat"]);
        assert_eq!(args.spec, PathBuf::from("dependencies.yaml"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.file.is_empty());
        assert!(!args.dry_run);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
        assert!(!args.list);
    }

    #[test]
    fn test_spec_argument() {
        let args = CliArgs::parse_from(["depmat", "/some/dependencies.yaml"]);
        assert_eq!(args.spec, PathBuf::from("/some/dependencies.yaml"));
    }

    #[test]
    fn test_output_dir_short_flag() {
        let args = CliArgs::parse_from(["depmat", "-o", "conda/environments"]);
        assert_eq!(args.output_dir, PathBuf::from("conda/environments"));
    }

    #[test]
    fn test_output_dir_long_flag() {
        let args = CliArgs::parse_from(["depmat", "--output-dir", "out"]);
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_dry_run_short_flag() {
        let args = CliArgs::parse_from(["depmat", "-n"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_dry_run_long_flag() {
        let args = CliArgs::parse_from(["depmat", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["depmat", "--verbose"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["depmat", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["depmat", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_file_multiple() {
        let args = CliArgs::parse_from(["depmat", "--file", "all", "--file", "docs"]);
        assert_eq!(args.file, vec!["all", "docs"]);
    }

    #[test]
    fn test_json_output() {
        let args = CliArgs::parse_from(["depmat", "--json"]);
        assert!(args.json);
    }

    #[test]
    fn test_list_flag() {
        let args = CliArgs::parse_from(["depmat", "--list"]);
        assert!(args.list);
    }

    #[test]
    fn test_has_file_filter() {
        let args = CliArgs::parse_from(["depmat"]);
        assert!(!args.has_file_filter());

        let args = CliArgs::parse_from(["depmat", "--file", "all"]);
        assert!(args.has_file_filter());
    }

    #[test]
    fn test_should_compile_file() {
        let args = CliArgs::parse_from(["depmat"]);
        assert!(args.should_compile_file("anything"));

        let args = CliArgs::parse_from(["depmat", "--file", "all"]);
        assert!(args.should_compile_file("all"));
        assert!(!args.should_compile_file("docs"));
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "depmat",
            "deps/dependencies.yaml",
            "-o",
            "out",
            "-n",
            "--verbose",
            "--file",
            "all",
            "--json",
        ]);
        assert_eq!(args.spec, PathBuf::from("deps/dependencies.yaml"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.dry_run);
        assert!(args.verbose);
        assert_eq!(args.file, vec!["all"]);
        assert!(args.json);
    }
}
