// src/graph/network.rs
//! The link network: a node table plus the selected matrix formulation.

use serde::Serialize;

use super::compiler;
use super::formula::MatrixFormula;
use super::ranks::RankVector;
use super::stochastic::Damping;
use super::table::NodeTable;
use super::types::{AdjacencyList, NodeEntry, NodeRef};
use crate::error::Result;
use crate::linalg::Matrix;

/// All four display matrices with their shared row/column labels.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixSet {
    pub nodes: Vec<String>,
    pub adjacency: Matrix,
    pub simple: Matrix,
    pub stochastic: Matrix,
    pub google: Matrix,
}

/// What the info panel shows for one selected node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInfo {
    pub node: String,
    pub rank: Option<f64>,
    pub parents: Vec<String>,
    pub children: Vec<String>,
}

/// A directed link graph ready for ranking.
#[derive(Debug, Clone)]
pub struct Network {
    table: NodeTable,
    formula: MatrixFormula,
    damping: Damping,
}

impl Default for Network {
    fn default() -> Self {
        Self::new(&AdjacencyList::new(), MatrixFormula::default())
    }
}

impl Network {
    #[must_use]
    pub fn new(list: &AdjacencyList, formula: MatrixFormula) -> Self {
        Self {
            table: NodeTable::new(list),
            formula,
            damping: Damping::default(),
        }
    }

    /// Compiles raw editor rows and builds the network from them.
    #[must_use]
    pub fn from_entries(entries: &[NodeEntry], formula: MatrixFormula) -> Self {
        Self::new(&compiler::compile(entries), formula)
    }

    #[must_use]
    pub fn with_damping(mut self, damping: Damping) -> Self {
        self.damping = damping;
        self
    }

    /// Replaces the graph and formula; the node table is rebuilt from scratch.
    pub fn update_with(&mut self, list: &AdjacencyList, formula: MatrixFormula) {
        self.table = NodeTable::new(list);
        self.formula = formula;
    }

    pub fn set_damping(&mut self, damping: Damping) {
        self.damping = damping;
    }

    #[must_use]
    pub fn formula(&self) -> MatrixFormula {
        self.formula
    }

    #[must_use]
    pub fn damping(&self) -> Damping {
        self.damping
    }

    #[must_use]
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.table.dim()
    }

    #[must_use]
    pub fn nodes(&self) -> &[String] {
        self.table.nodes()
    }

    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.table.edge_labels()
    }

    /// # Errors
    /// Fails if either endpoint is unknown.
    pub fn has_link<'a, 'b>(
        &self,
        from: impl Into<NodeRef<'a>>,
        to: impl Into<NodeRef<'b>>,
    ) -> Result<bool> {
        let from = self.table.resolve(from.into())?;
        let to = self.table.resolve(to.into())?;
        Ok(self.table.has_link(from, to))
    }

    /// # Errors
    /// Fails if `node` is unknown.
    pub fn parents_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&str>> {
        self.table.parents_of(node)
    }

    /// # Errors
    /// Fails if `node` is unknown.
    pub fn children_of<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<Vec<&str>> {
        self.table.children_of(node)
    }

    /// The matrix selected by the current formula.
    pub fn matrix(&mut self) -> &Matrix {
        match self.formula {
            MatrixFormula::Simple => self.table.simple_matrix(),
            MatrixFormula::Stochastic => self.table.stochastic_matrix(),
            MatrixFormula::Google => self.table.google_matrix(self.damping),
        }
    }

    pub fn google_matrix(&mut self) -> &Matrix {
        self.table.google_matrix(self.damping)
    }

    /// Copies of every display matrix.
    pub fn matrices(&mut self) -> MatrixSet {
        let google = self.google_matrix().clone();
        MatrixSet {
            nodes: self.table.nodes().to_vec(),
            adjacency: self.table.adjacency_as_matrix(),
            simple: self.table.simple_matrix().clone(),
            stochastic: self.table.stochastic_matrix().clone(),
            google,
        }
    }

    /// Labels `values` with this network's canonical node order.
    #[must_use]
    pub fn rank_vector(&self, values: &[f64]) -> RankVector {
        RankVector::new(self.table.nodes(), values)
    }

    /// # Errors
    /// Fails if `node` is unknown.
    pub fn node_info<'a>(&self, node: impl Into<NodeRef<'a>>, ranks: &RankVector) -> Result<NodeInfo> {
        let id = self.table.resolve(node.into())?;
        let label = self.table.node(id).unwrap_or_default().to_string();
        Ok(NodeInfo {
            rank: ranks.get(&label),
            parents: owned(self.table.parents_of(id)?),
            children: owned(self.table.children_of(id)?),
            node: label,
        })
    }
}

fn owned(labels: Vec<&str>) -> Vec<String> {
    labels.into_iter().map(str::to_string).collect()
}
