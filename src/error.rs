//! Application error types using thiserror
//!
//! Error hierarchy:
//! - SchemaError: Malformed or inconsistent specification documents (fatal,
//!   nothing is written)
//! - EmitError: A merged entry cannot be rendered in a requested syntax
//!   (fatal for that output only)
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::OutputKind;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Specification document related errors
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Manifest rendering related errors
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while parsing and validating a specification document
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not well-formed YAML or has the wrong shape
    #[error("invalid specification document: {message}")]
    Document { message: String },

    /// Two axes share the same name
    #[error("duplicate axis '{name}'")]
    DuplicateAxis { name: String },

    /// Two file specs share the same name
    #[error("duplicate file spec '{name}'")]
    DuplicateFile { name: String },

    /// Two dependency sets share the same name
    #[error("duplicate dependency set '{name}'")]
    DuplicateSet { name: String },

    /// A matrix constraint names the same axis twice
    #[error("set '{set}' constrains axis '{axis}' more than once")]
    DuplicateMatchAxis { set: String, axis: String },

    /// An axis declares no values
    #[error("axis '{name}' has an empty value list")]
    EmptyAxis { name: String },

    /// A file spec includes a dependency set that is not declared
    #[error("file spec '{file}' includes undeclared set '{set}'")]
    UndeclaredSet { file: String, set: String },

    /// A matrix selection or constraint names an axis outside the global table
    #[error("{context} references unknown axis '{axis}'")]
    UnknownAxis { context: String, axis: String },

    /// An output kind string is outside the supported enumeration
    #[error("{context} declares unknown output kind '{value}'")]
    UnknownOutputKind { context: String, value: String },

    /// A requirement string has no parsable package name
    #[error("{context} contains invalid requirement '{text}'")]
    InvalidRequirement { context: String, text: String },

    /// A --file argument names a file spec absent from the document
    #[error("no file spec named '{name}' in the specification")]
    UnknownFileSelection { name: String },
}

/// Errors raised while rendering a merged entry list into a target syntax
#[derive(Error, Debug)]
pub enum EmitError {
    /// An environment marker has no equivalent in the target syntax
    #[error(
        "package '{package}' carries marker '{marker}' which cannot be expressed in {kind} output"
    )]
    MarkerUnsupported {
        package: String,
        marker: String,
        kind: OutputKind,
    },

    /// The underlying serializer rejected the rendered document
    #[error("failed to serialize {kind} output: {message}")]
    Serialize { kind: OutputKind, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read the specification document
    #[error("failed to read specification {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a generated manifest
    #[error("failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output directory
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Creates a new Document error
    pub fn document(message: impl Into<String>) -> Self {
        SchemaError::Document {
            message: message.into(),
        }
    }

    /// Creates a new UndeclaredSet error
    pub fn undeclared_set(file: impl Into<String>, set: impl Into<String>) -> Self {
        SchemaError::UndeclaredSet {
            file: file.into(),
            set: set.into(),
        }
    }

    /// Creates a new UnknownAxis error
    pub fn unknown_axis(context: impl Into<String>, axis: impl Into<String>) -> Self {
        SchemaError::UnknownAxis {
            context: context.into(),
            axis: axis.into(),
        }
    }

    /// Creates a new UnknownOutputKind error
    pub fn unknown_output_kind(context: impl Into<String>, value: impl Into<String>) -> Self {
        SchemaError::UnknownOutputKind {
            context: context.into(),
            value: value.into(),
        }
    }

    /// Creates a new InvalidRequirement error
    pub fn invalid_requirement(context: impl Into<String>, text: impl Into<String>) -> Self {
        SchemaError::InvalidRequirement {
            context: context.into(),
            text: text.into(),
        }
    }
}

impl EmitError {
    /// Creates a new MarkerUnsupported error
    pub fn marker_unsupported(
        package: impl Into<String>,
        marker: impl Into<String>,
        kind: OutputKind,
    ) -> Self {
        EmitError::MarkerUnsupported {
            package: package.into(),
            marker: marker.into(),
            kind,
        }
    }

    /// Creates a new Serialize error
    pub fn serialize(kind: OutputKind, message: impl Into<String>) -> Self {
        EmitError::Serialize {
            kind,
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new CreateDir error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
