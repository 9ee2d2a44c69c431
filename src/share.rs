// src/share.rs
//! Compact text form of a graph, as carried in shared links.
//!
//! Each source is written as `from:to1,to2` and terminated by `;`, e.g.
//! `A:B,C;B:A;C:;`. Labels containing `:`, `,` or `;` cannot be expressed.

use crate::graph::{AdjacencyList, NodeEntry};

/// Encodes a compiled adjacency list.
///
/// A child repeated under one source (left by merging rows with the same
/// name) starts a new record for that source, since repeats inside a record
/// collapse on decode. Merging the records back restores the list exactly.
#[must_use]
pub fn encode_graph(list: &AdjacencyList) -> String {
    let mut out = String::new();
    for entry in list {
        for record in records(&entry.to) {
            out.push_str(&entry.from);
            out.push(':');
            out.push_str(&record.join(","));
            out.push(';');
        }
    }
    out
}

/// Splits `to` into runs without repeated labels; always at least one run.
fn records(to: &[String]) -> Vec<Vec<&str>> {
    let mut runs: Vec<Vec<&str>> = vec![Vec::new()];
    for child in to {
        let needs_new = runs.last().is_some_and(|run| run.contains(&child.as_str()));
        if needs_new {
            runs.push(Vec::new());
        }
        if let Some(run) = runs.last_mut() {
            run.push(child);
        }
    }
    runs
}

/// Decodes graph text into editor rows.
///
/// Tolerates a missing trailing `;`, blank records, surrounding whitespace
/// and records without `:` (a node with no children). The rows still go
/// through [`compile`](crate::graph::compile), which does the rest of the
/// clean-up.
#[must_use]
pub fn decode_graph(text: &str) -> Vec<NodeEntry> {
    text.split(';')
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .map(|record| match record.split_once(':') {
            Some((name, children)) => NodeEntry::new(name.trim(), children.trim()),
            None => NodeEntry::new(record, ""),
        })
        .collect()
}
