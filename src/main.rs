//! depmat - Dependency matrix compiler CLI tool
//!
//! Reads one specification document and writes every applicable output
//! manifest: environment files, requirement lists and packaging-metadata
//! fragments, one per (file spec, matrix point, output kind).

use clap::Parser;
use depmat::cli::CliArgs;
use depmat::orchestrator::Compiler;
use depmat::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("depmat v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Specification: {}", args.spec.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let compiler = Compiler::new(args.clone());

    // --list prints the planned output paths without compiling bodies
    if args.list {
        let jobs = compiler.plan()?;
        let mut stdout = io::stdout().lock();
        for job in jobs {
            writeln!(stdout, "{}", job.path.display())?;
        }
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = compiler.run().await?;

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.dry_run);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    if outcome.errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Partial success - some outputs failed to render or write
        Ok(ExitCode::from(2))
    }
}
