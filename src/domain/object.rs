// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-addressed object nodes and dot-path resolution.
//!
//! An [`ObjectNode`] maps string keys to child nodes. Keys are always iterated in
//! lexicographic order, whatever order they were inserted in. Every key-addressed read
//! fails with [`NodeError::KeyNotFound`] when the key is absent; use
//! [`contains_key`](ObjectNode::contains_key) to probe without failing.

use crate::domain::errors::{NodeError, Result};
use crate::domain::list::ListNode;
use crate::domain::node::Node;
use crate::domain::path::NodePath;
use crate::domain::serialization::{
    Deserializable, ObjectDeserializer, ObjectSerializer, Serializable,
};
use crate::domain::value::ValueNode;
use std::collections::btree_map::{self, BTreeMap};

/// A mapping from string keys to nodes.
///
/// # Examples
///
/// ```
/// use confmaster::domain::ObjectNode;
///
/// let mut root = ObjectNode::new();
/// root.set("b", 2).set("a", 1);
/// root.set("nested", ObjectNode::new().with("c", 33));
///
/// assert_eq!(root.keys().collect::<Vec<_>>(), ["a", "b", "nested"]);
/// assert_eq!(root.resolve_i32("nested.c").unwrap(), 33);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectNode {
    children: BTreeMap<String, Node>,
}

impl ObjectNode {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an object from `value` using an external serializer.
    ///
    /// The serializer runs exactly once against a fresh, empty object.
    pub fn from_value<T, S>(value: &T, serializer: &S) -> Self
    where
        T: ?Sized,
        S: ObjectSerializer<T> + ?Sized,
    {
        let mut node = ObjectNode::new();
        serializer.serialize(&mut node, value);
        node
    }

    /// Builds an object from a value that serializes itself.
    pub fn from_serializable<T>(value: &T) -> Self
    where
        T: Serializable + ?Sized,
    {
        Self::from_value(value, &|node: &mut ObjectNode, v: &T| v.serialize_into(node))
    }

    /// Fills `instance` from this object using an external deserializer and returns it.
    pub fn to<T, D>(&self, mut instance: T, deserializer: &D) -> Result<T>
    where
        D: ObjectDeserializer<T> + ?Sized,
    {
        deserializer.deserialize(&mut instance, self)?;
        Ok(instance)
    }

    /// Fills `instance` from this object using its own deserialization and returns it.
    pub fn to_deserializable<T>(&self, instance: T) -> Result<T>
    where
        T: Deserializable,
    {
        self.to(instance, &|target: &mut T, node: &ObjectNode| {
            target.deserialize_from(node)
        })
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the object has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Returns the keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.keys().map(String::as_str)
    }

    /// Returns the entries in lexicographic key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.children.iter(),
        }
    }

    /// Returns the child under `key`.
    pub fn get(&self, key: &str) -> Result<&Node> {
        self.children.get(key).ok_or_else(|| NodeError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Returns the child under `key` mutably.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Node> {
        self.children
            .get_mut(key)
            .ok_or_else(|| NodeError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Stores `value` under `key`, replacing any previous child.
    ///
    /// Scalars are converted through the matching [`ValueNode`] constructor first.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Node>) -> &mut Self {
        self.children.insert(key.into(), value.into());
        self
    }

    /// Stores `value` under `key`, or removes `key` when `value` is `None`.
    ///
    /// A bare `None` needs its type spelled out (`None::<i32>`); [`unset`](Self::unset)
    /// is the direct form when there is no value to pass along.
    ///
    /// # Examples
    ///
    /// ```
    /// use confmaster::domain::ObjectNode;
    ///
    /// let mut root = ObjectNode::new();
    /// root.set("k", 5).set_optional("k", None::<i32>);
    /// assert!(!root.contains_key("k"));
    ///
    /// let port: Option<i32> = Some(8080);
    /// root.set_optional("port", port);
    /// assert_eq!(root.get_i32("port").unwrap(), 8080);
    /// ```
    pub fn set_optional<V: Into<Node>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        let key = key.into();
        match value {
            Some(value) => self.set(key, value),
            None => self.unset(&key),
        }
    }

    /// Removes `key` if present.
    pub fn unset(&mut self, key: &str) -> &mut Self {
        self.children.remove(key);
        self
    }

    /// Stores `value` under `key`, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the child under `key`, which must be a list.
    pub fn get_list(&self, key: &str) -> Result<&ListNode> {
        self.get(key)?.as_list()
    }

    /// Returns the child under `key`, which must be an object.
    pub fn get_object(&self, key: &str) -> Result<&ObjectNode> {
        self.get(key)?.as_object()
    }

    /// Returns the child under `key`, which must be a value.
    pub fn get_value(&self, key: &str) -> Result<&ValueNode> {
        self.get(key)?.as_value()
    }

    /// Same as `get_value(key)?.as_i8()`.
    pub fn get_i8(&self, key: &str) -> Result<i8> {
        self.get_value(key)?.as_i8()
    }

    /// Same as `get_value(key)?.as_i16()`.
    pub fn get_i16(&self, key: &str) -> Result<i16> {
        self.get_value(key)?.as_i16()
    }

    /// Same as `get_value(key)?.as_i32()`.
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        self.get_value(key)?.as_i32()
    }

    /// Same as `get_value(key)?.as_i64()`.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get_value(key)?.as_i64()
    }

    /// Same as `get_value(key)?.as_f32()`.
    pub fn get_f32(&self, key: &str) -> Result<f32> {
        self.get_value(key)?.as_f32()
    }

    /// Same as `get_value(key)?.as_f64()`.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.get_value(key)?.as_f64()
    }

    /// Same as `get_value(key)?.as_bool()`.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_value(key)?.as_bool()
    }

    /// Same as `get_value(key)?.as_char()`.
    pub fn get_char(&self, key: &str) -> Result<char> {
        self.get_value(key)?.as_char()
    }

    /// Same as `get_value(key)?.as_string()`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get_value(key)?.as_string()
    }

    /// Walks down the object children named by `segments`, starting at `self`.
    ///
    /// Each segment must name an object child. An empty segment list returns `self`.
    /// On failure the reported key is the dotted path up to the offending segment.
    pub fn resolve_segments<S: AsRef<str>>(&self, segments: &[S]) -> Result<&ObjectNode> {
        let mut current = self;
        for (depth, segment) in segments.iter().enumerate() {
            current = current
                .get_object(segment.as_ref())
                .map_err(|e| qualify(e, &segments[..=depth]))?;
        }
        Ok(current)
    }

    /// Mutable counterpart of [`resolve_segments`](Self::resolve_segments).
    pub fn resolve_segments_mut<S: AsRef<str>>(
        &mut self,
        segments: &[S],
    ) -> Result<&mut ObjectNode> {
        let mut current = self;
        for (depth, segment) in segments.iter().enumerate() {
            current = current
                .get_mut(segment.as_ref())
                .and_then(Node::as_object_mut)
                .map_err(|e| qualify(e, &segments[..=depth]))?;
        }
        Ok(current)
    }

    /// Resolves a dotted path to a nested object.
    ///
    /// # Examples
    ///
    /// ```
    /// use confmaster::domain::ObjectNode;
    ///
    /// let root = ObjectNode::new().with("a", ObjectNode::new().with("b", ObjectNode::new()));
    /// assert!(root.resolve("a.b").unwrap().is_empty());
    /// assert!(root.resolve("a.missing").is_err());
    /// ```
    pub fn resolve(&self, path: &str) -> Result<&ObjectNode> {
        self.resolve_segments(NodePath::parse(path).segments())
    }

    /// Resolves a dotted path to a nested object, mutably.
    pub fn resolve_mut(&mut self, path: &str) -> Result<&mut ObjectNode> {
        self.resolve_segments_mut(NodePath::parse(path).segments())
    }

    /// Resolves all but the last segment of `path`, then reads the last segment with `get`.
    ///
    /// A missing key anywhere along the path, including the last segment, is reported with
    /// the dotted path up to and including that segment.
    fn resolve_with<'a, T>(
        &'a self,
        path: &str,
        get: impl FnOnce(&'a ObjectNode, &str) -> Result<T>,
    ) -> Result<T> {
        let path = NodePath::parse(path);
        let (prefix, last) = path.split_last().ok_or_else(|| NodeError::KeyNotFound {
            key: String::new(),
        })?;
        let parent = self.resolve_segments(prefix)?;
        get(parent, last).map_err(|e| qualify(e, path.segments()))
    }

    /// Resolves the list at the end of a dotted path.
    pub fn resolve_list(&self, path: &str) -> Result<&ListNode> {
        self.resolve_with(path, ObjectNode::get_list)
    }

    /// Resolves the `i8` at the end of a dotted path.
    pub fn resolve_i8(&self, path: &str) -> Result<i8> {
        self.resolve_with(path, ObjectNode::get_i8)
    }

    /// Resolves the `i16` at the end of a dotted path.
    pub fn resolve_i16(&self, path: &str) -> Result<i16> {
        self.resolve_with(path, ObjectNode::get_i16)
    }

    /// Resolves the `i32` at the end of a dotted path.
    pub fn resolve_i32(&self, path: &str) -> Result<i32> {
        self.resolve_with(path, ObjectNode::get_i32)
    }

    /// Resolves the `i64` at the end of a dotted path.
    pub fn resolve_i64(&self, path: &str) -> Result<i64> {
        self.resolve_with(path, ObjectNode::get_i64)
    }

    /// Resolves the `f32` at the end of a dotted path.
    pub fn resolve_f32(&self, path: &str) -> Result<f32> {
        self.resolve_with(path, ObjectNode::get_f32)
    }

    /// Resolves the `f64` at the end of a dotted path.
    pub fn resolve_f64(&self, path: &str) -> Result<f64> {
        self.resolve_with(path, ObjectNode::get_f64)
    }

    /// Resolves the boolean at the end of a dotted path.
    pub fn resolve_bool(&self, path: &str) -> Result<bool> {
        self.resolve_with(path, ObjectNode::get_bool)
    }

    /// Resolves the character at the end of a dotted path.
    pub fn resolve_char(&self, path: &str) -> Result<char> {
        self.resolve_with(path, ObjectNode::get_char)
    }

    /// Resolves the string at the end of a dotted path.
    pub fn resolve_string(&self, path: &str) -> Result<String> {
        self.resolve_with(path, ObjectNode::get_string)
    }
}

/// Replaces the single segment in a KeyNotFound with the dotted path walked so far.
fn qualify<S: AsRef<str>>(error: NodeError, walked: &[S]) -> NodeError {
    match error {
        NodeError::KeyNotFound { .. } => NodeError::KeyNotFound {
            key: walked
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join("."),
        },
        other => other,
    }
}

/// Iterator over the entries of an [`ObjectNode`] in key order.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ObjectNode {
    type Item = (&'a str, &'a Node);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ObjectNode {
    type Item = (String, Node);
    type IntoIter = btree_map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}
