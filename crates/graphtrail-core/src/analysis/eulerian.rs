//! Eulerian path/cycle classification via Euler's theorem: a connected graph
//! has an Eulerian trail iff it has exactly 0 or 2 odd-degree vertices, and
//! a circuit iff it has exactly 0.

use serde::{Deserialize, Serialize};

use super::connectivity::connectivity;
use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerianKind {
    Cycle,
    Path,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eulerian {
    pub kind: EulerianKind,
    /// The two odd-degree nodes a trail must start and end at, in node
    /// insertion order. Populated only for `EulerianKind::Path`.
    pub endpoints: Option<(String, String)>,
    pub odd_nodes: Vec<String>,
    pub connected: bool,
}

/// Degree is taken over the literal adjacency as parsed, so undirected
/// symmetrization is already reflected in the counts.
pub fn eulerian(graph: &Graph) -> Eulerian {
    let odd_nodes: Vec<String> = graph
        .nodes()
        .iter()
        .filter(|node| graph.degree(node.as_str()) % 2 == 1)
        .cloned()
        .collect();
    let connected = connectivity(graph).connected;

    let (kind, endpoints) = if connected && odd_nodes.is_empty() {
        (EulerianKind::Cycle, None)
    } else if connected && odd_nodes.len() == 2 {
        (
            EulerianKind::Path,
            Some((odd_nodes[0].clone(), odd_nodes[1].clone())),
        )
    } else {
        (EulerianKind::None, None)
    };

    Eulerian {
        kind,
        endpoints,
        odd_nodes,
        connected,
    }
}
