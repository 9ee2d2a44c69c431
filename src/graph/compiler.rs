// src/graph/compiler.rs
//! Turns raw editor rows into a clean adjacency list.
//!
//! Editing produces half-typed rows constantly, so nothing here fails:
//! blank names are skipped, blank child tokens are dropped, and repeated
//! names are folded into the first record with that name.

use std::collections::HashMap;

use super::types::{AdjacencyEntry, AdjacencyList, NodeEntry};

/// Compiles node entries into an [`AdjacencyList`].
///
/// Output order follows the first appearance of each name.
#[must_use]
pub fn compile(entries: &[NodeEntry]) -> AdjacencyList {
    let mut list: AdjacencyList = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged = 0usize;

    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }

        let children = split_children(&entry.children);

        if let Some(&pos) = positions.get(name) {
            if let Some(existing) = list.get_mut(pos) {
                existing.to.extend(children);
                merged += 1;
            }
            continue;
        }

        positions.insert(name.to_string(), list.len());
        list.push(AdjacencyEntry::new(name, children));
    }

    log::debug!(
        "compiled {} entries into {} sources ({} merged)",
        entries.len(),
        list.len(),
        merged
    );

    list
}

/// Splits a comma-separated children string into trimmed, non-empty,
/// unique tokens in declaration order.
#[must_use]
pub fn split_children(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for token in raw.split(',').map(str::trim) {
        if token.is_empty() || tokens.iter().any(|t| t == token) {
            continue;
        }
        tokens.push(token.to_string());
    }

    tokens
}
