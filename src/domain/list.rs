// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered, index-addressed list nodes.

use crate::domain::errors::{NodeError, Result};
use crate::domain::node::Node;
use crate::domain::node_type::NodeType;
use crate::domain::object::ObjectNode;
use crate::domain::serialization::{ObjectSerializer, Serializable};
use crate::domain::value::ValueNode;

/// An ordered sequence of nodes.
///
/// Insertion order is preserved and indices are dense. The list only grows: children are
/// appended with [`add`](Self::add) and read back by index.
///
/// # Examples
///
/// ```
/// use confmaster::domain::ListNode;
///
/// let mut list = ListNode::new();
/// list.add("aaa").add("bbb");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get_string(0).unwrap(), "aaa");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListNode {
    children: Vec<Node>,
}

impl ListNode {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list of objects, one per item, using an external serializer.
    pub fn from_values<'a, T, I, S>(data: I, serializer: &S) -> Self
    where
        T: ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        S: ObjectSerializer<T> + ?Sized,
    {
        data.into_iter()
            .map(|datum| ObjectNode::from_value(datum, serializer))
            .collect()
    }

    /// Builds a list of objects from items that serialize themselves.
    pub fn from_serializables<'a, T, I>(data: I) -> Self
    where
        T: Serializable + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        data.into_iter().map(ObjectNode::from_serializable).collect()
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the list has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns an iterator over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Appends a child.
    ///
    /// Scalars are converted through the matching [`ValueNode`] constructor first.
    pub fn add(&mut self, value: impl Into<Node>) -> &mut Self {
        self.children.push(value.into());
        self
    }

    /// Appends a child, builder style.
    pub fn with(mut self, value: impl Into<Node>) -> Self {
        self.add(value);
        self
    }

    /// Returns the child at `index`.
    pub fn get(&self, index: usize) -> Result<&Node> {
        self.children.get(index).ok_or(NodeError::IndexOutOfBounds {
            index,
            len: self.children.len(),
        })
    }

    /// Returns the child at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Node> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(NodeError::IndexOutOfBounds { index, len })
    }

    /// Returns the child at `index`, which must be a list.
    pub fn get_list(&self, index: usize) -> Result<&ListNode> {
        self.get(index)?.as_list()
    }

    /// Returns the child at `index`, which must be an object.
    pub fn get_object(&self, index: usize) -> Result<&ObjectNode> {
        self.get(index)?.as_object()
    }

    /// Returns the child at `index`, which must be a value.
    pub fn get_value(&self, index: usize) -> Result<&ValueNode> {
        self.get(index)?.as_value()
    }

    /// Same as `get_value(index)?.as_i8()`.
    pub fn get_i8(&self, index: usize) -> Result<i8> {
        self.get_value(index)?.as_i8()
    }

    /// Same as `get_value(index)?.as_i16()`.
    pub fn get_i16(&self, index: usize) -> Result<i16> {
        self.get_value(index)?.as_i16()
    }

    /// Same as `get_value(index)?.as_i32()`.
    pub fn get_i32(&self, index: usize) -> Result<i32> {
        self.get_value(index)?.as_i32()
    }

    /// Same as `get_value(index)?.as_i64()`.
    pub fn get_i64(&self, index: usize) -> Result<i64> {
        self.get_value(index)?.as_i64()
    }

    /// Same as `get_value(index)?.as_f32()`.
    pub fn get_f32(&self, index: usize) -> Result<f32> {
        self.get_value(index)?.as_f32()
    }

    /// Same as `get_value(index)?.as_f64()`.
    pub fn get_f64(&self, index: usize) -> Result<f64> {
        self.get_value(index)?.as_f64()
    }

    /// Same as `get_value(index)?.as_bool()`.
    pub fn get_bool(&self, index: usize) -> Result<bool> {
        self.get_value(index)?.as_bool()
    }

    /// Same as `get_value(index)?.as_char()`.
    pub fn get_char(&self, index: usize) -> Result<char> {
        self.get_value(index)?.as_char()
    }

    /// Same as `get_value(index)?.as_string()`.
    pub fn get_string(&self, index: usize) -> Result<String> {
        self.get_value(index)?.as_string()
    }
}

impl<N: Into<Node>> FromIterator<N> for ListNode {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        ListNode {
            children: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<N: Into<Node>> Extend<N> for ListNode {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.children.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ListNode {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a ListNode {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
