// src/graph/mod.rs
//! Link graphs: compilation, indexing, and stochastic matrices.

pub mod compiler;
pub mod formula;
pub mod network;
pub mod ranks;
pub mod stochastic;
pub mod table;
pub mod types;

pub use compiler::compile;
pub use formula::MatrixFormula;
pub use network::{MatrixSet, Network, NodeInfo};
pub use ranks::RankVector;
pub use stochastic::{Damping, DEFAULT_DAMPING};
pub use table::NodeTable;
pub use types::{AdjacencyEntry, AdjacencyList, NodeEntry, NodeId, NodeRef};
