use thiserror::Error;

use crate::analysis::AnalysisKind;

/// How much of a rejected input the diagnostic echoes back.
const SNIPPET_LEN: usize = 200;

/// Core error type for GraphTrail.
///
/// None of these escape the module boundary as errors: [`crate::run_analysis`]
/// renders them into the returned diagnostic string.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("could not extract a graph from input: \"{snippet}\"")]
    Unparseable { snippet: String },
    #[error("unknown node '{}'; known nodes: [{}]", .node, .known.join(", "))]
    UnknownNode { node: String, known: Vec<String> },
    #[error("{} requires both a start and an end node", .kind.as_str())]
    MissingEndpoints { kind: AnalysisKind },
    #[error("unsupported analysis kind: '{0}' (expected path_analysis, eulerian_path, connectivity, or cycle_detection)")]
    UnknownAnalysis(String),
}

impl GraphError {
    pub fn unparseable(input: &str) -> Self {
        let mut snippet: String = input.chars().take(SNIPPET_LEN).collect();
        if input.chars().count() > SNIPPET_LEN {
            snippet.push_str("...");
        }
        Self::Unparseable { snippet }
    }

    pub fn unknown_node(node: &str, graph: &crate::graph::Graph) -> Self {
        Self::UnknownNode {
            node: node.to_string(),
            known: graph.nodes().to_vec(),
        }
    }
}
