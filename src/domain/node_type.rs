// SPDX-License-Identifier: MIT OR Apache-2.0

//! The discriminant shared by every node in the tree.

use std::fmt;

/// Which of the three node kinds a [`Node`](crate::domain::Node) is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// A scalar holding a number or a string.
    Value,
    /// An ordered, index-addressed sequence of nodes.
    List,
    /// A key-addressed mapping of strings to nodes.
    Object,
}

impl NodeType {
    /// Returns the lowercase name of the discriminant.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Value => "value",
            NodeType::List => "list",
            NodeType::Object => "object",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
