//! Graph traversal analysis for research-agent pipelines.
//!
//! Callers hand [`run_analysis`] a loosely structured textual description of
//! a graph plus an analysis mode and receive a deterministic text report.
//! The boundary never raises: parse and lookup failures are rendered into
//! the returned string so a tool-calling loop is never interrupted.

mod analysis;
mod analyze;
mod error;
mod graph;
mod parse;
mod report;

pub use analysis::{
    Analysis, AnalysisKind, AnalysisOptions, AnalysisOutcome, Connectivity, Eulerian,
    EulerianKind, GraphSummary, PathAnalysis, all_paths, connectivity, cycles, eulerian,
    shortest_path,
};
pub use analyze::{analyze, run_analysis};
pub use error::GraphError;
pub use graph::Graph;
pub use parse::{GridAdvisory, Parsed, parse_description};
pub use report::{render_edge_list, render_report};
