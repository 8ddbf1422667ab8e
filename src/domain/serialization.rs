// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reflection-free mapping between host types and object nodes.
//!
//! A host type is mapped either by an external function pair (for types the caller cannot
//! modify) or by implementing [`Serializable`] / [`Deserializable`] on the type itself.
//! Both routes only ever call `set` and `get_*` on an [`ObjectNode`], so equivalent logic
//! produces identical trees whichever route is taken.
//!
//! Closures implement the function traits directly:
//!
//! ```
//! use confmaster::domain::{ObjectNode, Result};
//!
//! struct Server {
//!     host: String,
//!     port: i32,
//! }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//!
//! let node = ObjectNode::from_value(&server, &|node: &mut ObjectNode, s: &Server| {
//!     node.set("host", s.host.as_str()).set("port", s.port);
//! });
//!
//! let copy = node
//!     .to(
//!         Server { host: String::new(), port: 0 },
//!         &|s: &mut Server, node: &ObjectNode| -> Result<()> {
//!             s.host = node.get_string("host")?;
//!             s.port = node.get_i32("port")?;
//!             Ok(())
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(copy.host, "localhost");
//! assert_eq!(copy.port, 8080);
//! ```

use crate::domain::errors::Result;
use crate::domain::object::ObjectNode;

/// Writes the fields of a `T` into an object node.
pub trait ObjectSerializer<T: ?Sized> {
    /// Calls `set` on `node` for every field of `value` that should be exposed.
    fn serialize(&self, node: &mut ObjectNode, value: &T);
}

impl<T, F> ObjectSerializer<T> for F
where
    T: ?Sized,
    F: Fn(&mut ObjectNode, &T),
{
    fn serialize(&self, node: &mut ObjectNode, value: &T) {
        self(node, value)
    }
}

/// Fills a `T` from the fields of an object node.
pub trait ObjectDeserializer<T: ?Sized> {
    /// Reads from `node` with `get_*` calls and stores the results in `instance`.
    fn deserialize(&self, instance: &mut T, node: &ObjectNode) -> Result<()>;
}

impl<T, F> ObjectDeserializer<T> for F
where
    T: ?Sized,
    F: Fn(&mut T, &ObjectNode) -> Result<()>,
{
    fn deserialize(&self, instance: &mut T, node: &ObjectNode) -> Result<()> {
        self(instance, node)
    }
}

/// A type that knows how to write itself into an object node.
pub trait Serializable {
    /// Calls `set` on `node` for every field that should be exposed.
    fn serialize_into(&self, node: &mut ObjectNode);
}

/// A type that knows how to fill itself from an object node.
pub trait Deserializable {
    /// Reads from `node` with `get_*` calls and stores the results in `self`.
    fn deserialize_from(&mut self, node: &ObjectNode) -> Result<()>;
}
