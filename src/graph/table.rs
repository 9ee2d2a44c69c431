// src/graph/table.rs
//! Indexed view of an adjacency list.
//!
//! Labels are interned into dense [`NodeId`]s in first-discovery order: each
//! source, then each of its children, as the list is scanned. That order is
//! the row/column order of every matrix the table produces.

use std::collections::HashMap;

use super::stochastic::{self, Damping};
use super::types::{AdjacencyList, NodeId, NodeRef};
use crate::error::{RankerError, Result};
use crate::linalg::Matrix;

/// Memoized damped matrix together with the β it was built for.
#[derive(Debug, Clone)]
struct GoogleCache {
    beta: Damping,
    matrix: Matrix,
}

/// Lookup tables and derived matrices for one adjacency list.
#[derive(Debug, Clone)]
pub struct NodeTable {
    nodes: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: Vec<(NodeId, NodeId)>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Vec<NodeId>>,
    adjacency: Vec<Vec<u8>>,
    simple: Matrix,
    stochastic: Matrix,
    google: Option<GoogleCache>,
}

impl NodeTable {
    /// Builds the table. Never fails; an empty list gives an empty table.
    #[must_use]
    pub fn new(list: &AdjacencyList) -> Self {
        let mut nodes: Vec<String> = Vec::new();
        let mut index: HashMap<String, NodeId> = HashMap::new();
        let mut edges = Vec::new();

        for entry in list {
            let from = intern(&entry.from, &mut nodes, &mut index);
            for child in &entry.to {
                let to = intern(child, &mut nodes, &mut index);
                edges.push((from, to));
            }
        }

        let dim = nodes.len();
        let (children, parents) = link_lists(&edges, dim);
        let adjacency = adjacency_matrix(&edges, dim);
        let degrees: Vec<usize> = children.iter().map(Vec::len).collect();

        let simple = stochastic::simple(&adjacency, &degrees);
        let stochastic = stochastic::stochastic(&adjacency, &degrees);

        log::debug!("node table built: {} nodes, {} edges", dim, edges.len());

        Self {
            nodes,
            index,
            edges,
            children,
            parents,
            adjacency,
            simple,
            stochastic,
            google: None,
        }
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node labels in canonical order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(String::as_str)
    }

    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Resolves a label or index to a [`NodeId`] known to this table.
    ///
    /// # Errors
    /// Returns [`RankerError::UnknownNode`] or [`RankerError::IndexOutOfRange`].
    pub fn resolve(&self, node: NodeRef<'_>) -> Result<NodeId> {
        match node {
            NodeRef::Label(label) => self
                .id_of(label)
                .ok_or_else(|| RankerError::UnknownNode(label.to_string())),
            NodeRef::Index(index) if index < self.dim() => Ok(NodeId(index)),
            NodeRef::Index(index) => Err(RankerError::IndexOutOfRange {
                index,
                dim: self.dim(),
            }),
        }
    }

    /// Every declared edge in discovery order, duplicates included.
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Edges as label pairs, for display.
    #[must_use]
    pub fn edge_labels(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| Some((self.node(a)?, self.node(b)?)))
            .collect()
    }

    #[must_use]
    pub fn has_link(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(from.0)
            .and_then(|row| row.get(to.0))
            .is_some_and(|&cell| cell == 1)
    }

    /// Number of declared children, counting repeated edges.
    #[must_use]
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.children.get(id.0).map_or(0, Vec::len)
    }

    /// Sources linking into `node`, in edge discovery order.
    ///
    /// # Errors
    /// Fails if `node` does not resolve.
    pub fn parents_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&str>> {
        let id = self.resolve(node.into())?;
        Ok(self.labels(self.parents.get(id.0)))
    }

    /// Targets of `node`, in edge discovery order.
    ///
    /// # Errors
    /// Fails if `node` does not resolve.
    pub fn children_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&str>> {
        let id = self.resolve(node.into())?;
        Ok(self.labels(self.children.get(id.0)))
    }

    /// `adjacency[i][j] == 1` iff some edge `i → j` was declared.
    #[must_use]
    pub fn adjacency_matrix(&self) -> &[Vec<u8>] {
        &self.adjacency
    }

    /// The adjacency matrix widened to floats, for tabular display.
    #[must_use]
    pub fn adjacency_as_matrix(&self) -> Matrix {
        Matrix::from_rows(
            self.adjacency
                .iter()
                .map(|row| row.iter().map(|&c| f64::from(c)).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn simple_matrix(&self) -> &Matrix {
        &self.simple
    }

    #[must_use]
    pub fn stochastic_matrix(&self) -> &Matrix {
        &self.stochastic
    }

    /// Damped matrix for `beta`, computed on first request and reused until a
    /// different β is asked for.
    pub fn google_matrix(&mut self, beta: Damping) -> &Matrix {
        if self.google.as_ref().is_some_and(|c| c.beta != beta) {
            self.google = None;
        }

        let s = &self.stochastic;
        &self
            .google
            .get_or_insert_with(|| {
                log::debug!("computing damped matrix (beta = {})", beta.value());
                GoogleCache {
                    beta,
                    matrix: stochastic::google(s, beta),
                }
            })
            .matrix
    }

    /// The memoized damped matrix, if one has been computed.
    #[must_use]
    pub fn cached_google(&self) -> Option<(Damping, &Matrix)> {
        self.google.as_ref().map(|c| (c.beta, &c.matrix))
    }

    fn labels(&self, ids: Option<&Vec<NodeId>>) -> Vec<&str> {
        ids.map(|ids| ids.iter().filter_map(|&id| self.node(id)).collect())
            .unwrap_or_default()
    }
}

fn intern(label: &str, nodes: &mut Vec<String>, index: &mut HashMap<String, NodeId>) -> NodeId {
    if let Some(&id) = index.get(label) {
        return id;
    }
    let id = NodeId(nodes.len());
    nodes.push(label.to_string());
    index.insert(label.to_string(), id);
    id
}

/// Per-node child and parent lists. Children keep repeated edges so that
/// their length is the out-degree; parents list each source once.
fn link_lists(edges: &[(NodeId, NodeId)], dim: usize) -> (Vec<Vec<NodeId>>, Vec<Vec<NodeId>>) {
    let mut children = vec![Vec::new(); dim];
    let mut parents: Vec<Vec<NodeId>> = vec![Vec::new(); dim];

    for &(from, to) in edges {
        if let Some(list) = children.get_mut(from.0) {
            list.push(to);
        }
        if let Some(list) = parents.get_mut(to.0) {
            if !list.contains(&from) {
                list.push(from);
            }
        }
    }

    (children, parents)
}

fn adjacency_matrix(edges: &[(NodeId, NodeId)], dim: usize) -> Vec<Vec<u8>> {
    let mut matrix = vec![vec![0u8; dim]; dim];
    for &(from, to) in edges {
        if let Some(cell) = matrix.get_mut(from.0).and_then(|row| row.get_mut(to.0)) {
            *cell = 1;
        }
    }
    matrix
}
