// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the node tree.
//!
//! This module defines the error types that can occur when reading, coercing, resolving
//! or converting nodes. All errors use `thiserror` for proper error handling and conversion.

use crate::domain::node_type::NodeType;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for node operations.
///
/// Every failure is reported at the point of the failing call and never leaves the
/// tree partially mutated. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use confmaster::domain::errors::NodeError;
///
/// fn lookup() -> Result<i32, NodeError> {
///     Err(NodeError::KeyNotFound {
///         key: "database.port".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NodeError {
    /// The node is not of the kind the caller asserted.
    #[error("Type mismatch: expected {expected} node, found {actual} node")]
    TypeMismatch {
        /// The discriminant the caller asked for
        expected: NodeType,
        /// The discriminant the node actually has
        actual: NodeType,
    },

    /// A value accessor was called before any payload was set.
    #[error("Value node has no payload")]
    UnsetValue,

    /// A string payload could not be parsed as the requested type.
    #[error("Failed to convert value '{value}' to type {target_type}")]
    FormatError {
        /// The string payload that failed to parse
        value: String,
        /// The target type name
        target_type: &'static str,
        /// The underlying parse error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A key lookup or path resolution referenced an absent key.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The missing key, or the dotted path up to the missing segment
        key: String,
    },

    /// A list read went past the end of the list.
    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The length of the list
        len: usize,
    },

    /// The generic tree import met a shape it cannot classify.
    #[error("Unrecognized input: cannot build a node from {found}")]
    UnrecognizedInput {
        /// A short description of the rejected shape
        found: &'static str,
    },

    /// A format backend failed to parse or render a document.
    #[error("Failed to parse document: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A document source (usually a file) could not be accessed.
    #[error("Document source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading or writing a document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NodeError {
    /// Creates a FormatError from a ParseIntError.
    pub fn from_parse_int_error(value: &str, target_type: &'static str, err: ParseIntError) -> Self {
        NodeError::FormatError {
            value: value.to_string(),
            target_type,
            source: Some(Box::new(err)),
        }
    }

    /// Creates a FormatError from a ParseFloatError.
    pub fn from_parse_float_error(
        value: &str,
        target_type: &'static str,
        err: ParseFloatError,
    ) -> Self {
        NodeError::FormatError {
            value: value.to_string(),
            target_type,
            source: Some(Box::new(err)),
        }
    }

    /// Creates a TypeMismatch error.
    pub fn type_mismatch(expected: NodeType, actual: NodeType) -> Self {
        NodeError::TypeMismatch { expected, actual }
    }
}

/// A specialized Result type for node operations.
pub type Result<T> = std::result::Result<T, NodeError>;
