//! Canonical in-memory graph: insertion-ordered node set plus adjacency lists.
//!
//! Adjacency entries keep their insertion order and may repeat (parallel
//! edges count toward degree). A graph is built fresh per analysis call and
//! never mutated by an analyzer.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<String>,
    adjacency: HashMap<String, Vec<String>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node if it is not already present.
    pub fn add_node(&mut self, label: &str) {
        if !self.adjacency.contains_key(label) {
            self.order.push(label.to_string());
            self.adjacency.insert(label.to_string(), Vec::new());
        }
    }

    /// Add a directed edge, registering both endpoints.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_node(from);
        self.add_node(to);
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.push(to.to_string());
        }
    }

    /// Add an edge in both directions (undirected input).
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// All node labels in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    /// Direct neighbors in insertion order; empty for unknown labels.
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.adjacency.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adjacency-list length: out-degree as parsed, which equals the
    /// incident-edge count after undirected symmetrization.
    pub fn degree(&self, label: &str) -> usize {
        self.neighbors(label).len()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Total adjacency entries across all nodes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Every adjacency entry as a (source, destination) pair, sources in
    /// node insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().flat_map(move |from| {
            self.neighbors(from)
                .iter()
                .map(move |to| (from.as_str(), to.as_str()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
