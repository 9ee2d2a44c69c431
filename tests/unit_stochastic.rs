// tests/unit_stochastic.rs
//! Tests for the three column-stochastic formulations.

use ranker_core::error::RankerError;
use ranker_core::graph::{compile, Damping, NodeEntry, NodeTable};
use ranker_core::linalg::Matrix;

const EPS: f64 = 1e-9;

fn table(rows: &[(&str, &str)]) -> NodeTable {
    let rows: Vec<NodeEntry> = rows.iter().map(|(n, c)| NodeEntry::new(*n, *c)).collect();
    NodeTable::new(&compile(&rows))
}

fn assert_rows(m: &Matrix, expected: &[&[f64]]) {
    assert_eq!(m.dim(), expected.len());
    for (j, row) in expected.iter().enumerate() {
        for (i, want) in row.iter().enumerate() {
            let got = m.get(j, i);
            assert!((got - want).abs() < EPS, "M[{j}][{i}] = {got}, expected {want}");
        }
    }
}

#[test]
fn test_dangling_column_handling() {
    let t = table(&[("A", "B")]);
    assert_rows(t.simple_matrix(), &[&[0.0, 0.0], &[1.0, 0.0]]);
    assert_rows(t.stochastic_matrix(), &[&[0.0, 0.5], &[1.0, 0.5]]);

    assert!(t.simple_matrix().column_sum(1).abs() < EPS);
    assert!((t.stochastic_matrix().column_sum(1) - 1.0).abs() < EPS);
}

#[test]
fn test_google_matrix_values() {
    let mut t = table(&[("A", "B")]);
    let g = t.google_matrix(Damping::default());
    assert_rows(g, &[&[0.1, 0.5], &[0.9, 0.5]]);
}

#[test]
fn test_self_loop_split_evenly() {
    let t = table(&[("A", "A,B"), ("B", "A")]);
    assert_rows(t.simple_matrix(), &[&[0.5, 1.0], &[0.5, 0.0]]);
    assert_eq!(t.simple_matrix(), t.stochastic_matrix());
}

#[test]
fn test_stochastic_and_google_columns_sum_to_one() {
    let mut t = table(&[("A", "B,C,D"), ("B", "C"), ("C", "A"), ("E", "E,A")]);
    let dim = t.dim();
    for i in 0..dim {
        assert!((t.stochastic_matrix().column_sum(i) - 1.0).abs() < EPS);
    }
    for beta in [0.15, 0.5, 0.8, 0.99] {
        let g = t.google_matrix(Damping::new(beta).unwrap());
        for i in 0..dim {
            assert!((g.column_sum(i) - 1.0).abs() < EPS, "beta {beta}, col {i}");
        }
    }
}

#[test]
fn test_simple_columns_sum_to_one_or_zero() {
    let t = table(&[("A", "B,C"), ("B", "C")]);
    let sums: Vec<f64> = (0..t.dim()).map(|i| t.simple_matrix().column_sum(i)).collect();
    assert!((sums[0] - 1.0).abs() < EPS);
    assert!((sums[1] - 1.0).abs() < EPS);
    assert!(sums[2].abs() < EPS);
}

#[test]
fn test_google_entries_are_strictly_positive() {
    let mut t = table(&[("A", "B"), ("C", "")]);
    let g = t.google_matrix(Damping::default()).clone();
    for row in g.rows() {
        assert!(row.iter().all(|v| *v > 0.0));
    }
}

#[test]
fn test_damping_rejects_out_of_range() {
    for bad in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
        assert!(matches!(Damping::new(bad), Err(RankerError::InvalidDamping(_))));
    }
    assert!((Damping::try_from(0.85).unwrap().value() - 0.85).abs() < EPS);
    assert!((Damping::default().value() - 0.8).abs() < EPS);
}

#[test]
fn test_single_dangling_node() {
    let mut t = table(&[("A", "")]);
    assert_rows(t.simple_matrix(), &[&[0.0]]);
    assert_rows(t.stochastic_matrix(), &[&[1.0]]);
    assert_rows(t.google_matrix(Damping::default()), &[&[1.0]]);
}

#[test]
fn test_three_cycle_is_a_permutation() {
    let t = table(&[("A", "B"), ("B", "C"), ("C", "A")]);
    assert_rows(
        t.stochastic_matrix(),
        &[&[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]],
    );
    let r = t.stochastic_matrix().mul_vec(&[1.0 / 3.0; 3]).unwrap();
    assert!(r.iter().all(|v| (v - 1.0 / 3.0).abs() < EPS));
}
