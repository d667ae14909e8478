//! Structural analyzers over a parsed [`Graph`] and their result types.
//!
//! Every analyzer is a pure function of the graph; none mutates it, and all
//! traversals use explicit frame stacks so recursion depth is bounded by
//! heap rather than the call stack.

mod connectivity;
mod cycles;
mod eulerian;
mod paths;

pub use connectivity::{Connectivity, connectivity};
pub use cycles::cycles;
pub use eulerian::{Eulerian, EulerianKind, eulerian};
pub use paths::{PathAnalysis, all_paths, shortest_path};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::parse::GridAdvisory;

/// Analysis modes exposed at the module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    PathAnalysis,
    EulerianPath,
    Connectivity,
    CycleDetection,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::PathAnalysis => "path_analysis",
            AnalysisKind::EulerianPath => "eulerian_path",
            AnalysisKind::Connectivity => "connectivity",
            AnalysisKind::CycleDetection => "cycle_detection",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = GraphError;

    fn from_str(value: &str) -> Result<Self, GraphError> {
        match value.trim() {
            "path_analysis" => Ok(AnalysisKind::PathAnalysis),
            "eulerian_path" => Ok(AnalysisKind::EulerianPath),
            "connectivity" => Ok(AnalysisKind::Connectivity),
            "cycle_detection" => Ok(AnalysisKind::CycleDetection),
            other => Err(GraphError::UnknownAnalysis(other.to_string())),
        }
    }
}

/// Runtime knobs for a single analysis invocation.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Hard cap on all-paths enumeration (path counts grow exponentially on
    /// dense graphs).
    pub max_paths: usize,
    /// Formatter-only truncation of the cycle listing.
    pub cycle_display_cap: usize,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self {
            max_paths: 10,
            cycle_display_cap: 5,
        }
    }

    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    pub fn with_cycle_display_cap(mut self, cycle_display_cap: usize) -> Self {
        self.cycle_display_cap = cycle_display_cap;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Structured result of one analyzer run, ready for the formatter.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "analysis", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Connectivity(Connectivity),
    Eulerian(Eulerian),
    Paths(PathAnalysis),
    Cycles { cycles: Vec<Vec<String>> },
    Advisory(GridAdvisory),
}

/// Display-ready facts about a parsed graph: sorted node list, counts, and
/// the per-node degree mapping.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub nodes: Vec<String>,
    pub node_count: usize,
    pub edge_count: usize,
    pub degrees: Vec<(String, usize)>,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let mut nodes = graph.nodes().to_vec();
        nodes.sort();
        let degrees = nodes
            .iter()
            .map(|node| (node.clone(), graph.degree(node)))
            .collect();
        Self {
            node_count: nodes.len(),
            edge_count: graph.edge_count(),
            nodes,
            degrees,
        }
    }
}

/// A complete analysis: the requested mode, the graph facts (absent for
/// advisory outcomes), and the structured result.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub kind: AnalysisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<GraphSummary>,
    pub outcome: AnalysisOutcome,
}

pub(crate) fn require_node(graph: &Graph, label: &str) -> Result<(), GraphError> {
    if graph.contains(label) {
        Ok(())
    } else {
        Err(GraphError::unknown_node(label, graph))
    }
}
