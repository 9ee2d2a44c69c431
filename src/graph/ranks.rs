// src/graph/ranks.rs
//! Rank vectors keyed by node label.

use serde::ser::{Serialize, Serializer};

/// A copy of the engine's rank vector, paired with node labels in canonical
/// order. Mutating it never touches engine state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankVector {
    entries: Vec<(String, f64)>,
}

impl RankVector {
    /// Pairs `labels` with `values` positionally; extra items on either side
    /// are ignored.
    #[must_use]
    pub fn new(labels: &[String], values: &[f64]) -> Self {
        Self {
            entries: labels.iter().cloned().zip(values.iter().copied()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), *p))
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, p)| *p).collect()
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Smallest and largest probability, or `None` when empty.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.entries.iter().map(|(_, p)| *p).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }

    /// Entries sorted by descending probability; ties keep canonical order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

impl Serialize for RankVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(l, p)| (l, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RankVector {
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        RankVector::new(&labels, &[0.2, 0.5, 0.3])
    }

    #[test]
    fn ranked_sorts_descending() {
        let v = sample();
        let order: Vec<&str> = v.ranked().into_iter().map(|(l, _)| l).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn min_max_of_empty_is_none() {
        assert!(RankVector::default().min_max().is_none());
        assert_eq!(sample().min_max(), Some((0.2, 0.5)));
    }

    #[test]
    fn serializes_as_ordered_map() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"A":0.2,"B":0.5,"C":0.3}"#);
    }
}
