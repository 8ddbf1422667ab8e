// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-separated paths addressing nested object nodes.
//!
//! This module provides the `NodePath` type, which splits a path such as `"a.b.c"` into
//! its ordered segments so that resolution only ever works on a segment list.

use std::fmt;

/// An ordered list of object keys.
///
/// The empty string is the empty path, which addresses the object the resolution starts
/// from. Any other text is split on every `.`. Leading and interior empty segments are kept
/// and are looked up like any other key; trailing empty segments are dropped, so `"a.b."`
/// is the same path as `"a.b"`.
///
/// # Examples
///
/// ```
/// use confmaster::domain::NodePath;
///
/// let path = NodePath::parse("database.primary.port");
/// assert_eq!(path.segments(), ["database", "primary", "port"]);
///
/// let (prefix, last) = path.split_last().unwrap();
/// assert_eq!(prefix, ["database", "primary"]);
/// assert_eq!(last, "port");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// Creates a path from already separated segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NodePath(segments.into_iter().map(Into::into).collect())
    }

    /// Splits a dotted path into segments, dropping trailing empty ones.
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<String> = path.split('.').map(str::to_string).collect();
        while segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }
        NodePath(segments)
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Splits the path into all segments but the last, and the last segment.
    ///
    /// Returns `None` for the empty path.
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        self.0
            .split_last()
            .map(|(last, prefix)| (prefix, last.as_str()))
    }

    /// Consumes the path, returning its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for NodePath {
    fn from(s: &str) -> Self {
        NodePath::parse(s)
    }
}

impl From<String> for NodePath {
    fn from(s: String) -> Self {
        NodePath::parse(&s)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let path = NodePath::parse("port");
        assert_eq!(path.segments(), ["port"]);
        let (prefix, last) = path.split_last().unwrap();
        assert!(prefix.is_empty());
        assert_eq!(last, "port");
    }

    #[test]
    fn test_parse_empty() {
        let path = NodePath::parse("");
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert!(path.split_last().is_none());
    }

    #[test]
    fn test_parse_keeps_inner_empty_segments() {
        assert_eq!(NodePath::parse("a..b").segments(), ["a", "", "b"]);
        assert_eq!(NodePath::parse(".a").segments(), ["", "a"]);
    }

    #[test]
    fn test_parse_drops_trailing_empty_segments() {
        assert_eq!(NodePath::parse("a.").segments(), ["a"]);
        assert_eq!(NodePath::parse("a.b..").segments(), ["a", "b"]);
        assert_eq!(NodePath::parse("a..b."), NodePath::parse("a..b"));
        assert!(NodePath::parse("...").is_empty());
    }

    #[test]
    fn test_new_from_segments() {
        let path = NodePath::new(["a", "b"]);
        assert_eq!(path, NodePath::parse("a.b"));
    }

    #[test]
    fn test_display() {
        assert_eq!(NodePath::parse("a.b.c").to_string(), "a.b.c");
        assert_eq!(format!("{}", NodePath::default()), "");
    }

    #[test]
    fn test_from_string() {
        let path = NodePath::from("x.y".to_string());
        assert_eq!(path.into_segments(), vec!["x".to_string(), "y".to_string()]);
    }
}
