// SPDX-License-Identifier: MIT OR Apache-2.0

//! A backend-agnostic configuration tree.
//!
//! This crate provides an in-memory data model for structured configuration: a tree of
//! objects, lists and scalar values, with precise coercion between scalar types, dot-path
//! resolution, and a reflection-free bridge to and from application types.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The node tree and its conversions (`Node`, `ObjectNode`, `ListNode`,
//!   `ValueNode`, errors, the serialization traits and the backend-neutral `GenericValue`)
//! - **Ports**: Trait definitions for external collaborators (`FormatBackend`)
//! - **Adapters**: Concrete text format backends (YAML)
//!
//! # Node kinds
//!
//! - **Value**: a number or a string, readable as any scalar type. A value set from a
//!   number and a value parsed from text give the same answers.
//! - **List**: an ordered, append-only sequence of nodes.
//! - **Object**: a mapping of string keys to nodes, iterated in lexicographic key order.
//!
//! Every accessor asserts the kind of node it expects and fails with
//! [`NodeError::TypeMismatch`](domain::NodeError::TypeMismatch) otherwise.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML backend and YAML file adapter (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use confmaster::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut root = ObjectNode::new();
//! root.set("name", "service")
//!     .set("server", ObjectNode::new().with("port", 8080))
//!     .set("tags", ListNode::new().with("a").with("b"));
//!
//! assert_eq!(root.resolve_i32("server.port")?, 8080);
//! assert_eq!(root.get_list("tags")?.get_string(1)?, "b");
//! assert_eq!(root.keys().collect::<Vec<_>>(), ["name", "server", "tags"]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        Deserializable, ListNode, Node, NodeError, NodePath, NodeType, ObjectDeserializer,
        ObjectNode, ObjectSerializer, Result, Serializable, ValueNode,
    };
    pub use crate::ports::FormatBackend;

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlBackend, YamlFile};
}
