// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the node tree and its conversions.
//!
//! This module contains the core data model: the three node kinds, scalar coercion,
//! dot-path resolution and the reflection-free bridge to host types. It is independent
//! of any text format and performs no I/O.

pub mod errors;
pub mod generic;
pub mod list;
pub mod node;
pub mod node_type;
pub mod number;
pub mod object;
pub mod path;
pub mod serialization;
pub mod value;

// Re-export commonly used types
pub use errors::{NodeError, Result};
pub use generic::{deserialize_tree, serialize_object, serialize_tree, GenericValue};
pub use list::ListNode;
pub use node::Node;
pub use node_type::NodeType;
pub use number::Number;
pub use object::ObjectNode;
pub use path::NodePath;
pub use serialization::{Deserializable, ObjectDeserializer, ObjectSerializer, Serializable};
pub use value::ValueNode;
