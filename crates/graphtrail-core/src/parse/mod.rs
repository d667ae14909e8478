//! Parsing of loosely structured graph descriptions.
//!
//! Each recognizable format is one [`ParseRule`]; rules are tried in fixed
//! priority order (mapping, edge list, grid advisory) and the first match
//! wins, so an input matching several formats is never ambiguous.

mod edges;
mod grid;
mod mapping;

pub use grid::GridAdvisory;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

/// Outcome of parsing a textual graph description.
///
/// The grid/ownership fallback never reconstructs geometry; it yields an
/// advisory finding instead of a canonical graph.
#[derive(Debug, Clone)]
pub enum Parsed {
    Graph(Graph),
    Advisory(GridAdvisory),
}

/// A single parsing strategy.
pub(crate) trait ParseRule {
    fn name(&self) -> &'static str;

    /// Attempt to extract a graph (or advisory) from the text. `None` means
    /// the rule does not apply and the next rule should be tried.
    fn try_parse(&self, text: &str) -> Option<Parsed>;
}

static RULES: [&(dyn ParseRule + Sync); 3] =
    [&mapping::MappingRule, &edges::EdgeListRule, &grid::GridRule];

/// Parse a free-form graph description.
///
/// Fails with [`GraphError::Unparseable`] (echoing a truncated prefix of the
/// input) when no rule extracts at least one edge or advisory finding.
pub fn parse_description(text: &str) -> Result<Parsed, GraphError> {
    for rule in RULES {
        if let Some(parsed) = rule.try_parse(text) {
            debug!(rule = rule.name(), "graph description parsed");
            return Ok(parsed);
        }
    }
    Err(GraphError::unparseable(text))
}
