//! PageRank by power iteration over hand-written link graphs.
//!
//! Editor rows (`name` plus comma-separated `children`) are compiled into an
//! adjacency list, indexed into a [`graph::NodeTable`], and turned into one of
//! three column-stochastic matrices. A [`power::PowerIterator`] then steps the
//! rank vector, either manually or on a timer supplied by a
//! [`power::Scheduler`].

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod linalg;
pub mod logging;
pub mod power;
pub mod reporting;
pub mod share;
