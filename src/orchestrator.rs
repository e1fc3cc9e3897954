//! Compile orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: parse → validate → expand → merge → emit
//! - Bounded parallel emission across (file spec, matrix point, kind) jobs
//! - Dry-run mode support
//! - File spec selection via --file
//! - Emit error collection with partial continuation

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::cli::CliArgs;
use crate::domain::{
    CompileSummary, FileCompileResult, FileSpec, MatrixPoint, Model, OutputKind,
};
use crate::emit::{emitter_for, output_path, output_stem, EmitContext};
use crate::error::{AppError, IoError, SchemaError};
use crate::matrix::expand;
use crate::merge::merge;
use crate::progress::Progress;

/// Concurrency limit for emit jobs
const DEFAULT_CONCURRENCY: usize = 8;

/// Orchestrator for the compile workflow
pub struct Compiler {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// One planned (file spec, matrix point, output kind) emission
#[derive(Debug, Clone, Serialize)]
pub struct CompileJob {
    /// The file spec being compiled
    pub spec: FileSpec,
    /// The active matrix point
    pub point: MatrixPoint,
    /// Output kind to render
    pub kind: OutputKind,
    /// Destination path of the generated manifest
    pub path: PathBuf,
}

/// Result of running the compiler
#[derive(Debug)]
pub struct CompileOutcome {
    /// Compile summary with all emitted outputs
    pub summary: CompileSummary,
    /// Per-output errors; the rest of the compilation continued
    pub errors: Vec<CompileError>,
}

/// Errors scoped to a single output file
#[derive(Debug)]
pub enum CompileError {
    /// A merged entry could not be rendered in the requested syntax
    Emit { path: PathBuf, message: String },
    /// The rendered manifest could not be written
    Write { path: PathBuf, message: String },
}

impl CompileError {
    fn emit(path: PathBuf, message: impl ToString) -> Self {
        CompileError::Emit {
            path,
            message: message.to_string(),
        }
    }

    fn write(path: PathBuf, message: impl ToString) -> Self {
        CompileError::Write {
            path,
            message: message.to_string(),
        }
    }

    /// Returns the output path this error is scoped to
    pub fn path(&self) -> &PathBuf {
        match self {
            CompileError::Emit { path, .. } | CompileError::Write { path, .. } => path,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Emit { path, message } => {
                write!(f, "Failed to render {}: {}", path.display(), message)
            }
            CompileError::Write { path, message } => {
                write!(f, "Failed to write {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CompileError {}

impl Compiler {
    /// Create a new compiler with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Read, parse and validate the specification document
    pub fn load_model(&self) -> Result<Model, AppError> {
        let content = fs::read_to_string(&self.args.spec)
            .map_err(|e| IoError::read(&self.args.spec, e))?;
        Ok(crate::schema::parse_document(&content)?)
    }

    /// Plan every emission without rendering anything
    pub fn plan(&self) -> Result<Vec<CompileJob>, AppError> {
        let model = self.load_model()?;
        let selected = self.select_files(&model)?;
        Ok(self.plan_jobs(&model, &selected))
    }

    /// Run the compile workflow
    pub async fn run(&self) -> Result<CompileOutcome, AppError> {
        self.run_with_progress(!self.args.quiet).await
    }

    /// Run the compile workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<CompileOutcome, AppError> {
        let mut progress = Progress::new(show_progress);

        // Step 1: Parse and validate the specification. Any SchemaError is
        // fatal before a single output is written.
        progress.spinner("Parsing specification...");
        let model = self.load_model();
        progress.finish_and_clear();
        let model = Arc::new(model?);

        // Step 2: Plan the job list in deterministic order
        let selected = self.select_files(&model)?;
        let jobs = self.plan_jobs(&model, &selected);

        let mut summary = CompileSummary::new(self.args.dry_run);
        let mut errors = Vec::new();

        if jobs.is_empty() {
            return Ok(CompileOutcome { summary, errors });
        }

        // Step 3: Emit every job, bounded by the semaphore. Each job reads
        // only the shared immutable model and writes its own distinct file.
        progress.start(jobs.len() as u64, "Rendering manifests");
        let semaphore = Arc::new(Semaphore::new(DEFAULT_CONCURRENCY));
        let mut tasks: JoinSet<(usize, Result<FileCompileResult, CompileError>)> = JoinSet::new();

        let dry_run = self.args.dry_run;
        for (index, job) in jobs.into_iter().enumerate() {
            let model = Arc::clone(&model);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
                (index, compile_job(&model, &job, dry_run))
            });
        }

        let mut slots: Vec<Option<Result<FileCompileResult, CompileError>>> = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            progress.inc();
            match joined {
                Ok((index, result)) => {
                    if slots.len() <= index {
                        slots.resize_with(index + 1, || None);
                    }
                    if let Ok(ref output) = result {
                        progress.set_message(&output.path.display().to_string());
                    }
                    slots[index] = Some(result);
                }
                Err(join_error) => {
                    errors.push(CompileError::emit(PathBuf::new(), join_error));
                }
            }
        }
        progress.finish_and_clear();

        // Step 4: Fold results back into planned order so output listing and
        // error reporting are deterministic regardless of task completion
        for slot in slots.into_iter().flatten() {
            match slot {
                Ok(result) => summary.add_output(result),
                Err(error) => errors.push(error),
            }
        }

        Ok(CompileOutcome { summary, errors })
    }

    /// Resolve the --file selection against the model
    fn select_files<'a>(&self, model: &'a Model) -> Result<Vec<&'a FileSpec>, SchemaError> {
        if self.args.file.is_empty() {
            return Ok(model.files.iter().collect());
        }
        self.args
            .file
            .iter()
            .map(|name| {
                model
                    .file(name)
                    .ok_or_else(|| SchemaError::UnknownFileSelection { name: name.clone() })
            })
            .collect()
    }

    /// Expand every selected file spec into its job list
    fn plan_jobs(&self, model: &Model, selected: &[&FileSpec]) -> Vec<CompileJob> {
        let mut jobs = Vec::new();
        for spec in selected {
            for point in expand(&model.axes, &spec.matrix) {
                for kind in &spec.outputs {
                    jobs.push(CompileJob {
                        spec: (*spec).clone(),
                        point: point.clone(),
                        kind: *kind,
                        path: output_path(&self.args.output_dir, &spec.name, &point, *kind),
                    });
                }
            }
        }
        jobs
    }
}

/// Merge, render and write one output file
fn compile_job(
    model: &Model,
    job: &CompileJob,
    dry_run: bool,
) -> Result<FileCompileResult, CompileError> {
    let entries = merge(model, &job.spec, &job.point, job.kind)
        .map_err(|e| CompileError::emit(job.path.clone(), e))?;

    let stem = output_stem(&job.spec.name, &job.point);
    let ctx = EmitContext {
        file: &job.spec.name,
        stem: &stem,
        channels: &model.channels,
    };
    let body = emitter_for(job.kind)
        .render(&ctx, &entries)
        .map_err(|e| CompileError::emit(job.path.clone(), e))?;

    if !dry_run {
        if let Some(parent) = job.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| CompileError::write(job.path.clone(), e))?;
            }
        }
        fs::write(&job.path, body).map_err(|e| CompileError::write(job.path.clone(), e))?;
    }

    Ok(FileCompileResult {
        file: job.spec.name.clone(),
        kind: job.kind,
        point: if job.point.is_unconditional() {
            String::new()
        } else {
            job.point.to_string()
        },
        path: job.path.clone(),
        package_count: entries.len(),
        written: !dry_run,
    })
}
