// src/graph/types.rs
//! Core types shared by the compiler, the node table and the network.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense index of a node inside a [`NodeTable`](super::NodeTable).
///
/// Labels are interned once at table construction; everything downstream
/// (matrices, rank vectors) is addressed by this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node addressed either by label or by canonical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Label(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(label: &'a str) -> Self {
        Self::Label(label)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(label: &'a String) -> Self {
        Self::Label(label.as_str())
    }
}

impl From<usize> for NodeRef<'_> {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<NodeId> for NodeRef<'_> {
    fn from(id: NodeId) -> Self {
        Self::Index(id.0)
    }
}

/// One row of the node editor: a node name and its comma-separated children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: String,
}

impl NodeEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, children: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: children.into(),
        }
    }
}

/// A source node and the labels it links to, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub from: String,
    pub to: Vec<String>,
}

impl AdjacencyEntry {
    #[must_use]
    pub fn new(from: impl Into<String>, to: Vec<String>) -> Self {
        Self {
            from: from.into(),
            to,
        }
    }
}

/// Ordered adjacency list. `from` labels are unique once compiled.
pub type AdjacencyList = Vec<AdjacencyEntry>;
