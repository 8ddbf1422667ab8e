// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend-neutral representation of a node tree.
//!
//! Format backends never walk nodes themselves. They convert their text to and from
//! [`GenericValue`] (which implements `serde::Serialize` and `serde::Deserialize`, so any
//! serde format works), and the two functions here bridge a `GenericValue` to a [`Node`].

use crate::domain::errors::{NodeError, Result};
use crate::domain::list::ListNode;
use crate::domain::node::Node;
use crate::domain::number::Number;
use crate::domain::object::ObjectNode;
use crate::domain::value::ValueNode;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A tree of plain data a text encoder can write or a text decoder can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericValue {
    /// An absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence.
    Sequence(Vec<GenericValue>),
    /// A mapping ordered by key.
    Mapping(BTreeMap<String, GenericValue>),
}

impl GenericValue {
    /// Returns a short description of the shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            GenericValue::Null => "null",
            GenericValue::Bool(_) => "boolean",
            GenericValue::Integer(_) => "integer",
            GenericValue::Float(_) => "float",
            GenericValue::String(_) => "string",
            GenericValue::Sequence(_) => "sequence",
            GenericValue::Mapping(_) => "mapping",
        }
    }
}

/// Converts a node tree into its backend-neutral form.
///
/// Objects become mappings, lists become sequences and values become the raw string or
/// the raw number, whichever is stored. An unset value becomes [`GenericValue::Null`].
///
/// # Examples
///
/// ```
/// use confmaster::domain::{serialize_tree, GenericValue, Node, ObjectNode};
///
/// let root = Node::from(ObjectNode::new().with("a", 1).with("b", "x"));
/// match serialize_tree(&root) {
///     GenericValue::Mapping(map) => {
///         assert_eq!(map["a"], GenericValue::Integer(1));
///         assert_eq!(map["b"], GenericValue::String("x".to_string()));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn serialize_tree(root: &Node) -> GenericValue {
    match root {
        Node::Value(value) => serialize_value(value),
        Node::List(list) => GenericValue::Sequence(list.iter().map(serialize_tree).collect()),
        Node::Object(object) => serialize_object(object),
    }
}

/// Converts an object node into a backend-neutral mapping.
///
/// Equivalent to `serialize_tree(&Node::Object(object.clone()))` without the copy.
pub fn serialize_object(object: &ObjectNode) -> GenericValue {
    GenericValue::Mapping(
        object
            .iter()
            .map(|(key, child)| (key.to_string(), serialize_tree(child)))
            .collect(),
    )
}

fn serialize_value(value: &ValueNode) -> GenericValue {
    if let Some(s) = value.string() {
        return GenericValue::String(s.to_string());
    }
    match value.number() {
        // Go through the canonical text so backends print 0.1, not 0.10000000149011612.
        Some(Number::F32(f)) => GenericValue::Float(
            Number::F32(f)
                .to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| f64::from(f)),
        ),
        Some(Number::F64(f)) => GenericValue::Float(f),
        Some(n) => GenericValue::Integer(n.as_i64()),
        None => GenericValue::Null,
    }
}

/// Builds a node tree from its backend-neutral form.
///
/// Mappings become objects, sequences become lists and strings become string-backed
/// values. Every number is normalized to a 64-bit integer value; floats are truncated.
/// Booleans and nulls are rejected with [`NodeError::UnrecognizedInput`].
pub fn deserialize_tree(value: GenericValue) -> Result<Node> {
    match value {
        GenericValue::Mapping(map) => {
            let mut node = ObjectNode::new();
            for (key, child) in map {
                node.set(key, deserialize_tree(child)?);
            }
            Ok(Node::Object(node))
        }
        GenericValue::Sequence(items) => {
            let mut node = ListNode::new();
            for item in items {
                node.add(deserialize_tree(item)?);
            }
            Ok(Node::List(node))
        }
        GenericValue::String(s) => Ok(Node::from(s)),
        GenericValue::Integer(i) => Ok(Node::from(i)),
        GenericValue::Float(f) => Ok(Node::from(f as i64)),
        other => {
            tracing::debug!("Rejecting generic {} leaf", other.kind());
            Err(NodeError::UnrecognizedInput {
                found: other.kind(),
            })
        }
    }
}

impl Serialize for GenericValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            GenericValue::Null => serializer.serialize_unit(),
            GenericValue::Bool(b) => serializer.serialize_bool(*b),
            GenericValue::Integer(i) => serializer.serialize_i64(*i),
            GenericValue::Float(f) => serializer.serialize_f64(*f),
            GenericValue::String(s) => serializer.serialize_str(s),
            GenericValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GenericValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for GenericValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GenericValueVisitor;

        impl<'de> Visitor<'de> for GenericValueVisitor {
            type Value = GenericValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any configuration value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(GenericValue::Integer(i)),
                    Err(_) => Ok(GenericValue::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(GenericValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(GenericValue::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, GenericValue>()? {
                    entries.insert(key, value);
                }
                Ok(GenericValue::Mapping(entries))
            }
        }

        deserializer.deserialize_any(GenericValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node_type::NodeType;

    #[test]
    fn test_serialize_value_payloads() {
        assert_eq!(
            serialize_tree(&Node::from("s")),
            GenericValue::String("s".to_string())
        );
        assert_eq!(serialize_tree(&Node::from(7i8)), GenericValue::Integer(7));
        assert_eq!(serialize_tree(&Node::from(2.5)), GenericValue::Float(2.5));
        assert_eq!(serialize_tree(&Node::from(0.1f32)), GenericValue::Float(0.1));
        assert_eq!(
            serialize_tree(&Node::from(ValueNode::new())),
            GenericValue::Null
        );
    }

    #[test]
    fn test_serialize_nested() {
        let root = Node::from(
            ObjectNode::new()
                .with("b", ListNode::new().with("x").with(1))
                .with("a", ObjectNode::new()),
        );
        let expected = GenericValue::Mapping(BTreeMap::from([
            ("a".to_string(), GenericValue::Mapping(BTreeMap::new())),
            (
                "b".to_string(),
                GenericValue::Sequence(vec![
                    GenericValue::String("x".to_string()),
                    GenericValue::Integer(1),
                ]),
            ),
        ]));
        assert_eq!(serialize_tree(&root), expected);
    }

    #[test]
    fn test_deserialize_nested() {
        let input = GenericValue::Mapping(BTreeMap::from([
            ("a".to_string(), GenericValue::Integer(1)),
            (
                "c".to_string(),
                GenericValue::Sequence(vec![
                    GenericValue::String("aaa".to_string()),
                    GenericValue::String("bbb".to_string()),
                ]),
            ),
        ]));
        let node = deserialize_tree(input).unwrap();
        let root = node.as_object().unwrap();
        assert_eq!(root.get_i32("a").unwrap(), 1);
        assert_eq!(root.get_list("c").unwrap().get_string(0).unwrap(), "aaa");
        assert_eq!(root.get_list("c").unwrap().len(), 2);
    }

    #[test]
    fn test_deserialize_numbers_become_i64() {
        let node = deserialize_tree(GenericValue::Integer(5)).unwrap();
        assert_eq!(node.as_value().unwrap().number(), Some(Number::I64(5)));

        let node = deserialize_tree(GenericValue::Float(2.9)).unwrap();
        assert_eq!(node.as_value().unwrap().number(), Some(Number::I64(2)));
    }

    #[test]
    fn test_deserialize_string_is_string_backed() {
        let node = deserialize_tree(GenericValue::String("42".to_string())).unwrap();
        let value = node.as_value().unwrap();
        assert_eq!(value.string(), Some("42"));
        assert_eq!(value.as_i32().unwrap(), 42);
    }

    #[test]
    fn test_deserialize_rejects_bool_and_null() {
        assert!(matches!(
            deserialize_tree(GenericValue::Bool(true)),
            Err(NodeError::UnrecognizedInput { found: "boolean" })
        ));
        assert!(matches!(
            deserialize_tree(GenericValue::Null),
            Err(NodeError::UnrecognizedInput { found: "null" })
        ));
        let nested = GenericValue::Sequence(vec![GenericValue::Integer(1), GenericValue::Null]);
        assert!(matches!(
            deserialize_tree(nested),
            Err(NodeError::UnrecognizedInput { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_generic() {
        let root = Node::from(
            ObjectNode::new()
                .with("name", "svc")
                .with("port", 8080i64)
                .with("tags", ListNode::new().with("a").with("b")),
        );
        let back = deserialize_tree(serialize_tree(&root)).unwrap();
        assert_eq!(back, root);
        assert_eq!(back.node_type(), NodeType::Object);
    }
}
