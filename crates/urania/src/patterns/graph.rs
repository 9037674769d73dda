//! Aspect graph: one undirected adjacency map per aspect type.

use crate::aspects::Aspect;
use std::collections::{BTreeMap, BTreeSet};

type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// Edges of an aspect list, grouped by aspect name.
///
/// Built once per detection pass; every pattern query reads from it.
/// Aspect names are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct AspectGraph {
    by_kind: BTreeMap<String, Adjacency>,
}

impl AspectGraph {
    pub fn from_aspects(aspects: &[Aspect]) -> Self {
        let mut by_kind: BTreeMap<String, Adjacency> = BTreeMap::new();
        for aspect in aspects {
            if aspect.body_a == aspect.body_b {
                continue;
            }
            let adjacency = by_kind.entry(aspect.aspect.to_lowercase()).or_default();
            adjacency
                .entry(aspect.body_a.clone())
                .or_default()
                .insert(aspect.body_b.clone());
            adjacency
                .entry(aspect.body_b.clone())
                .or_default()
                .insert(aspect.body_a.clone());
        }
        Self { by_kind }
    }

    fn adjacency(&self, kind: &str) -> Option<&Adjacency> {
        self.by_kind.get(&kind.to_lowercase())
    }

    pub fn neighbors(&self, kind: &str, body: &str) -> impl Iterator<Item = &str> {
        self.adjacency(kind)
            .and_then(|adj| adj.get(body))
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn connected(&self, kind: &str, a: &str, b: &str) -> bool {
        self.adjacency(kind)
            .and_then(|adj| adj.get(a))
            .is_some_and(|set| set.contains(b))
    }

    /// Unordered edges of one kind, each as a sorted pair, in sorted order.
    pub fn edges(&self, kind: &str) -> Vec<(&str, &str)> {
        let Some(adjacency) = self.adjacency(kind) else {
            return Vec::new();
        };
        adjacency
            .iter()
            .flat_map(|(a, set)| {
                set.iter()
                    .filter(move |b| a.as_str() < b.as_str())
                    .map(move |b| (a.as_str(), b.as_str()))
            })
            .collect()
    }

    /// Bodies linked by `kind` to both `a` and `b`, in sorted order.
    pub fn common_neighbors(&self, kind: &str, a: &str, b: &str) -> Vec<&str> {
        self.neighbors(kind, a)
            .filter(|c| *c != b && self.connected(kind, b, c))
            .collect()
    }

    /// Triples whose three edges are all of `kind`, each sorted, in
    /// lexicographic order.
    pub fn triangles(&self, kind: &str) -> Vec<[&str; 3]> {
        let Some(adjacency) = self.adjacency(kind) else {
            return Vec::new();
        };
        let mut triangles = Vec::new();
        for (a, a_neighbors) in adjacency {
            for b in a_neighbors.range::<String, _>((
                std::ops::Bound::Excluded(a),
                std::ops::Bound::Unbounded,
            )) {
                for c in adjacency[b].range::<String, _>((
                    std::ops::Bound::Excluded(b),
                    std::ops::Bound::Unbounded,
                )) {
                    if a_neighbors.contains(c) {
                        triangles.push([a.as_str(), b.as_str(), c.as_str()]);
                    }
                }
            }
        }
        triangles
    }
}
