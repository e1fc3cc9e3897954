//! Specification document parsing and validation
//!
//! This module turns the YAML specification text into the immutable domain
//! model in two stages:
//! - `raw`: order-preserving walk of the YAML tree, duplicate-name detection
//! - `validate`: reference checking and selector compilation
//!
//! Any error is a `SchemaError` and aborts compilation before output is
//! written.

pub mod raw;
mod validate;

pub use raw::{OneOrMany, RawDocument, RawEntry, RawFile, RawGroup, RawSet};
pub use validate::validate;

use crate::domain::Model;
use crate::error::SchemaError;

/// Parses and validates a specification document
pub fn parse_document(text: &str) -> Result<Model, SchemaError> {
    validate(RawDocument::parse(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_valid() {
        let model = parse_document("files:\n  all:\n    output: environment\n").unwrap();
        assert_eq!(model.files.len(), 1);
    }

    #[test]
    fn test_parse_document_invalid() {
        assert!(parse_document("files: [broken").is_err());
    }

    #[test]
    fn test_parse_document_empty() {
        let model = parse_document("{}").unwrap();
        assert!(model.files.is_empty());
        assert!(model.sets.is_empty());
    }
}
