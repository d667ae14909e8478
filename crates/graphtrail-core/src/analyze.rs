//! Module boundary: parse, dispatch to the matching analyzer, and render.
//!
//! [`run_analysis`] is the tool-facing surface. It never fails: every parse
//! or lookup error is converted into a short diagnostic string so a caller
//! driving this from a retrieval loop always receives usable text.

use tracing::{debug, info, warn};

use crate::analysis::{
    Analysis, AnalysisKind, AnalysisOptions, AnalysisOutcome, GraphSummary, PathAnalysis,
    all_paths, connectivity, cycles, eulerian, shortest_path,
};
use crate::error::GraphError;
use crate::parse::{Parsed, parse_description};
use crate::report::render_report;

/// Typed library surface: parse the description and run one analyzer.
///
/// Each invocation is independent and side effect free; the parsed graph is
/// discarded once the [`Analysis`] is built.
pub fn analyze(
    description: &str,
    kind: AnalysisKind,
    start: Option<&str>,
    end: Option<&str>,
    options: &AnalysisOptions,
) -> Result<Analysis, GraphError> {
    let graph = match parse_description(description)? {
        Parsed::Advisory(advisory) => {
            debug!(references = advisory.references, "grid advisory produced");
            return Ok(Analysis {
                kind,
                structure: None,
                outcome: AnalysisOutcome::Advisory(advisory),
            });
        }
        Parsed::Graph(graph) => graph,
    };

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "canonical graph constructed"
    );

    let outcome = match kind {
        AnalysisKind::Connectivity => AnalysisOutcome::Connectivity(connectivity(&graph)),
        AnalysisKind::EulerianPath => AnalysisOutcome::Eulerian(eulerian(&graph)),
        AnalysisKind::CycleDetection => AnalysisOutcome::Cycles {
            cycles: cycles(&graph),
        },
        AnalysisKind::PathAnalysis => {
            let (Some(start), Some(end)) = (nonempty(start), nonempty(end)) else {
                return Err(GraphError::MissingEndpoints { kind });
            };
            let shortest = shortest_path(&graph, start, end)?;
            let paths = all_paths(&graph, start, end, options.max_paths)?;
            let truncated = options.max_paths > 0 && paths.len() >= options.max_paths;
            AnalysisOutcome::Paths(PathAnalysis {
                start: start.to_string(),
                end: end.to_string(),
                shortest,
                paths,
                truncated,
            })
        }
    };

    Ok(Analysis {
        kind,
        structure: Some(GraphSummary::of(&graph)),
        outcome,
    })
}

/// Tool-facing surface: resolve the analysis kind from its wire name, run
/// the analysis, and render the report. Never fails; errors come back as a
/// diagnostic string.
pub fn run_analysis(
    description: &str,
    kind: &str,
    start: Option<&str>,
    end: Option<&str>,
    options: &AnalysisOptions,
) -> String {
    let kind = match kind.parse::<AnalysisKind>() {
        Ok(kind) => kind,
        Err(err) => {
            warn!(%err, "rejected analysis request");
            return diagnostic(&err);
        }
    };

    info!(analysis = kind.as_str(), "graph traversal analysis requested");

    match analyze(description, kind, start, end, options) {
        Ok(analysis) => render_report(&analysis, options),
        Err(err) => {
            warn!(analysis = kind.as_str(), %err, "graph analysis failed");
            diagnostic(&err)
        }
    }
}

fn diagnostic(err: &GraphError) -> String {
    format!("Error in graph analysis: {err}")
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
