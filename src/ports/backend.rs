// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format backend trait definition.
//!
//! This module defines the `FormatBackend` trait, which provides an interface for
//! converting between a node tree and a concrete text format (YAML, TOML, JSON, etc.).

use crate::domain::{Node, ObjectNode, Result};

/// A trait for text format backends.
///
/// Backends are expected to go through [`GenericValue`](crate::domain::GenericValue) with
/// [`serialize_tree`](crate::domain::serialize_tree) and
/// [`deserialize_tree`](crate::domain::deserialize_tree), so that every backend agrees on
/// how leaves are imported and exported.
///
/// # Examples
///
/// ```rust
/// use confmaster::domain::{Node, ObjectNode, Result};
/// use confmaster::ports::FormatBackend;
///
/// struct KeyListBackend;
///
/// impl FormatBackend for KeyListBackend {
///     fn parse(&self, content: &str) -> Result<ObjectNode> {
///         let mut root = ObjectNode::new();
///         for key in content.lines() {
///             root.set(key, "");
///         }
///         Ok(root)
///     }
///
///     fn render(&self, root: &Node) -> Result<String> {
///         Ok(root.keys()?.join("\n"))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["keys"]
///     }
/// }
///
/// let backend = KeyListBackend;
/// let root = backend.parse("b\na").unwrap();
/// assert_eq!(backend.render(&Node::from(root)).unwrap(), "a\nb");
/// ```
pub trait FormatBackend {
    /// Parses a document whose root must be an object.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw text of the document
    ///
    /// # Returns
    ///
    /// * `Ok(ObjectNode)` - The root object of the document
    /// * `Err(NodeError)` - The text could not be parsed, contained an unrecognized
    ///   leaf, or its root was not an object
    fn parse(&self, content: &str) -> Result<ObjectNode>;

    /// Renders a node tree as a document.
    fn render(&self, root: &Node) -> Result<String>;

    /// Returns the file extensions handled by this backend.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
