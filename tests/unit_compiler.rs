// tests/unit_compiler.rs
//! Tests for compiling editor rows into an adjacency list.

use ranker_core::graph::{compile, AdjacencyEntry, NodeEntry};

fn entry(from: &str, to: &[&str]) -> AdjacencyEntry {
    AdjacencyEntry::new(from, to.iter().map(|s| (*s).to_string()).collect())
}

#[test]
fn test_duplicate_name_merges_children() {
    let rows = vec![NodeEntry::new("A", "B"), NodeEntry::new("A", "C")];
    let list = compile(&rows);
    assert_eq!(list, vec![entry("A", &["B", "C"])]);
}

#[test]
fn test_tokens_are_trimmed_and_blank_tokens_dropped() {
    let rows = vec![NodeEntry::new("A", "  B ,, C,  ,")];
    assert_eq!(compile(&rows), vec![entry("A", &["B", "C"])]);
}

#[test]
fn test_empty_name_is_ignored() {
    let rows = vec![
        NodeEntry::new("", "A,B"),
        NodeEntry::new("   ", "C"),
        NodeEntry::new("B", "A"),
    ];
    assert_eq!(compile(&rows), vec![entry("B", &["A"])]);
}

#[test]
fn test_empty_children_gives_dangling_entry() {
    let rows = vec![NodeEntry::new("A", "")];
    assert_eq!(compile(&rows), vec![entry("A", &[])]);
}

#[test]
fn test_self_loop_is_kept() {
    let rows = vec![NodeEntry::new("A", "A,B")];
    assert_eq!(compile(&rows), vec![entry("A", &["A", "B"])]);
}

#[test]
fn test_first_seen_order_is_preserved() {
    let rows = vec![
        NodeEntry::new("C", "A"),
        NodeEntry::new("A", "B"),
        NodeEntry::new("C", "B"),
        NodeEntry::new("B", ""),
    ];
    let froms: Vec<String> = compile(&rows).into_iter().map(|e| e.from).collect();
    assert_eq!(froms, vec!["C", "A", "B"]);
}

#[test]
fn test_repeated_token_within_row_collapses() {
    let rows = vec![NodeEntry::new("A", "B, B,C")];
    assert_eq!(compile(&rows), vec![entry("A", &["B", "C"])]);
}

#[test]
fn test_no_rows_compiles_to_empty_list() {
    assert!(compile(&[]).is_empty());
}
