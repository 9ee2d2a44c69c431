// src/reporting.rs
//! Console output for rankings, matrices and node details.

use anyhow::Result;
use colored::Colorize;

use crate::graph::{MatrixSet, NodeInfo, RankVector};
use crate::linalg::Matrix;
use crate::power::Progress;

const RULE_WIDTH: usize = 60;

/// Prints the final ranking, highest first.
pub fn print_ranking(title: &str, progress: &Progress, ranks: &RankVector) {
    println!();
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    println!(" {}", title.bold());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());

    if ranks.is_empty() {
        println!("  {}", "graph is empty".yellow());
        return;
    }

    let (lo, hi) = ranks.min_max().unwrap_or((0.0, 0.0));
    for (pos, (node, p)) in ranks.ranked().into_iter().enumerate() {
        let value = format!("{:>8.3}", p * 100.0);
        let value = if (p - hi).abs() < f64::EPSILON && hi > lo {
            value.green().bold()
        } else if (p - lo).abs() < f64::EPSILON && hi > lo {
            value.dimmed()
        } else {
            value.normal()
        };
        println!("  {:>3}. {:<12} {value} %", pos + 1, node);
    }

    println!();
    println!(
        "  {} {}/{}   {} {:.6}",
        "Step:".white(),
        progress.current_step,
        progress.max_iter,
        "Sum:".white(),
        ranks.sum()
    );
}

/// One playback line: `step  A=…  B=…`.
pub fn print_step(step: usize, max_iter: usize, ranks: &RankVector) {
    let cells: Vec<String> = ranks
        .iter()
        .map(|(node, p)| format!("{}={:.3}", node.cyan(), p * 100.0))
        .collect();
    println!("  [{step:>3}/{max_iter}] {}", cells.join("  "));
}

/// Prints the adjacency and the three stochastic matrices.
pub fn print_matrices(set: &MatrixSet) {
    print_matrix("Adjacency Matrix", &set.nodes, &set.adjacency);
    print_matrix("Semi Column-Stochastic Matrix", &set.nodes, &set.simple);
    print_matrix("True Column-Stochastic Matrix", &set.nodes, &set.stochastic);
    print_matrix("Google's PageRank Matrix", &set.nodes, &set.google);
}

pub fn print_matrix(title: &str, nodes: &[String], matrix: &Matrix) {
    println!();
    println!(" {}", title.bold());

    let header: String = nodes.iter().map(|n| format!("{n:>8}")).collect();
    println!("  {:<6}{}", "", header.dimmed());

    for (row, label) in matrix.rows().iter().zip(nodes) {
        let cells: String = row.iter().map(|v| format!("{v:>8.3}")).collect();
        println!("  {:<6}{cells}", label.dimmed());
    }
}

pub fn print_node_info(info: &NodeInfo) {
    let rank = info
        .rank
        .map_or_else(|| "-".to_string(), |p| format!("{:.3} %", p * 100.0));

    println!();
    println!(" {}", info.node.bold());
    println!("  {} {rank}", "Rank:".white());
    println!("  {} {}", "Parent(s):".white(), join_or_dash(&info.parents));
    println!("  {} {}", "Children:".white(), join_or_dash(&info.children));
}

fn join_or_dash(labels: &[String]) -> String {
    if labels.is_empty() {
        "-".dimmed().to_string()
    } else {
        labels.join(", ")
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
