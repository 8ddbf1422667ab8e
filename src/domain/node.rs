// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tagged union tying the three node kinds together.
//!
//! Narrowing a [`Node`] to a particular kind is an assertion by the caller: asking a
//! value for its keys, or a list for a key, fails with [`NodeError::TypeMismatch`].

use crate::domain::errors::{NodeError, Result};
use crate::domain::list::ListNode;
use crate::domain::node_type::NodeType;
use crate::domain::object::ObjectNode;
use crate::domain::value::ValueNode;

/// An element of the configuration tree.
///
/// Each node exclusively owns its children, so [`Clone`] (and [`Node::deep_clone`]) always
/// yields a fully independent copy.
///
/// # Examples
///
/// ```
/// use confmaster::domain::{Node, NodeType, ObjectNode};
///
/// let node = Node::from(ObjectNode::new().with("port", 8080));
/// assert_eq!(node.node_type(), NodeType::Object);
/// assert_eq!(node.as_object().unwrap().get_i32("port").unwrap(), 8080);
/// assert!(node.as_list().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A scalar value.
    Value(ValueNode),
    /// An ordered list of nodes.
    List(ListNode),
    /// A key-addressed object.
    Object(ObjectNode),
}

impl Node {
    /// Returns the discriminant of this node.
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Value(_) => NodeType::Value,
            Node::List(_) => NodeType::List,
            Node::Object(_) => NodeType::Object,
        }
    }

    /// Returns an independent copy of this node and everything below it.
    pub fn deep_clone(&self) -> Node {
        self.clone()
    }

    /// Narrows to a value node.
    pub fn as_value(&self) -> Result<&ValueNode> {
        match self {
            Node::Value(v) => Ok(v),
            other => Err(NodeError::type_mismatch(NodeType::Value, other.node_type())),
        }
    }

    /// Narrows to a list node.
    pub fn as_list(&self) -> Result<&ListNode> {
        match self {
            Node::List(l) => Ok(l),
            other => Err(NodeError::type_mismatch(NodeType::List, other.node_type())),
        }
    }

    /// Narrows to an object node.
    pub fn as_object(&self) -> Result<&ObjectNode> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(NodeError::type_mismatch(NodeType::Object, other.node_type())),
        }
    }

    /// Narrows to a mutable value node.
    pub fn as_value_mut(&mut self) -> Result<&mut ValueNode> {
        match self {
            Node::Value(v) => Ok(v),
            other => Err(NodeError::type_mismatch(NodeType::Value, other.node_type())),
        }
    }

    /// Narrows to a mutable list node.
    pub fn as_list_mut(&mut self) -> Result<&mut ListNode> {
        match self {
            Node::List(l) => Ok(l),
            other => Err(NodeError::type_mismatch(NodeType::List, other.node_type())),
        }
    }

    /// Narrows to a mutable object node.
    pub fn as_object_mut(&mut self) -> Result<&mut ObjectNode> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(NodeError::type_mismatch(NodeType::Object, other.node_type())),
        }
    }

    /// Unwraps a value node.
    pub fn into_value(self) -> Result<ValueNode> {
        match self {
            Node::Value(v) => Ok(v),
            other => Err(NodeError::type_mismatch(NodeType::Value, other.node_type())),
        }
    }

    /// Unwraps a list node.
    pub fn into_list(self) -> Result<ListNode> {
        match self {
            Node::List(l) => Ok(l),
            other => Err(NodeError::type_mismatch(NodeType::List, other.node_type())),
        }
    }

    /// Unwraps an object node.
    pub fn into_object(self) -> Result<ObjectNode> {
        match self {
            Node::Object(o) => Ok(o),
            other => Err(NodeError::type_mismatch(NodeType::Object, other.node_type())),
        }
    }

    /// Returns the keys of an object node in lexicographic order.
    pub fn keys(&self) -> Result<Vec<&str>> {
        Ok(self.as_object()?.keys().collect())
    }

    /// Returns the list child at `index`; this node must be a list.
    pub fn get_list_at(&self, index: usize) -> Result<&ListNode> {
        self.as_list()?.get_list(index)
    }

    /// Returns the object child at `index`; this node must be a list.
    pub fn get_object_at(&self, index: usize) -> Result<&ObjectNode> {
        self.as_list()?.get_object(index)
    }

    /// Returns the value child at `index`; this node must be a list.
    pub fn get_value_at(&self, index: usize) -> Result<&ValueNode> {
        self.as_list()?.get_value(index)
    }

    /// Returns the list child under `key`; this node must be an object.
    pub fn get_list(&self, key: &str) -> Result<&ListNode> {
        self.as_object()?.get_list(key)
    }

    /// Returns the object child under `key`; this node must be an object.
    pub fn get_object(&self, key: &str) -> Result<&ObjectNode> {
        self.as_object()?.get_object(key)
    }

    /// Returns the value child under `key`; this node must be an object.
    pub fn get_value(&self, key: &str) -> Result<&ValueNode> {
        self.as_object()?.get_value(key)
    }
}

impl From<ValueNode> for Node {
    fn from(v: ValueNode) -> Self {
        Node::Value(v)
    }
}

impl From<ListNode> for Node {
    fn from(l: ListNode) -> Self {
        Node::List(l)
    }
}

impl From<ObjectNode> for Node {
    fn from(o: ObjectNode) -> Self {
        Node::Object(o)
    }
}

impl From<i8> for Node {
    fn from(v: i8) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<i16> for Node {
    fn from(v: i16) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<f32> for Node {
    fn from(v: f32) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<char> for Node {
    fn from(v: char) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Value(ValueNode::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type() {
        assert_eq!(Node::from(1).node_type(), NodeType::Value);
        assert_eq!(Node::from(ListNode::new()).node_type(), NodeType::List);
        assert_eq!(Node::from(ObjectNode::new()).node_type(), NodeType::Object);
    }

    #[test]
    fn test_narrowing_wrong_kind_is_type_mismatch() {
        let node = Node::from("text");
        match node.as_list() {
            Err(NodeError::TypeMismatch { expected, actual }) => {
                assert_eq!(expected, NodeType::List);
                assert_eq!(actual, NodeType::Value);
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
        assert!(matches!(
            node.as_object(),
            Err(NodeError::TypeMismatch { .. })
        ));
        assert!(node.as_value().is_ok());
    }

    #[test]
    fn test_value_has_no_keys() {
        let node = Node::from(5);
        assert!(matches!(
            node.keys(),
            Err(NodeError::TypeMismatch {
                expected: NodeType::Object,
                actual: NodeType::Value
            })
        ));
    }

    #[test]
    fn test_keyed_access_on_list_fails() {
        let node = Node::from(ListNode::new().with(1));
        assert!(matches!(
            node.get_value("a"),
            Err(NodeError::TypeMismatch { .. })
        ));
        assert_eq!(node.get_value_at(0).unwrap().as_i32().unwrap(), 1);
    }

    #[test]
    fn test_indexed_access_on_object_fails() {
        let node = Node::from(ObjectNode::new().with("a", 1));
        assert!(matches!(
            node.get_value_at(0),
            Err(NodeError::TypeMismatch { .. })
        ));
        assert_eq!(node.get_value("a").unwrap().as_i32().unwrap(), 1);
        assert_eq!(node.keys().unwrap(), vec!["a"]);
    }

    #[test]
    fn test_into_and_mut_narrowing() {
        let mut node = Node::from(ObjectNode::new());
        node.as_object_mut().unwrap().set("k", "v");
        assert!(node.as_list_mut().is_err());
        let object = node.into_object().unwrap();
        assert_eq!(object.get_string("k").unwrap(), "v");
        assert!(Node::from(1).into_list().is_err());
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let original = Node::from(
            ObjectNode::new().with("inner", ObjectNode::new().with("x", 1)),
        );
        let mut clone = original.deep_clone();
        clone
            .as_object_mut()
            .unwrap()
            .resolve_mut("inner")
            .unwrap()
            .set("x", 2);

        assert_eq!(original.as_object().unwrap().resolve_i32("inner.x").unwrap(), 1);
        assert_eq!(clone.as_object().unwrap().resolve_i32("inner.x").unwrap(), 2);
    }
}
