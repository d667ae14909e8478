//! Edge-list rule: repeated `<label> <sep> <label>` tokens, with `->`/`→`
//! read as directed edges and `-` as undirected. Bare comma pairs are a last
//! resort and always undirected. The literal word "undirected" anywhere in
//! the text symmetrizes every edge.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ParseRule, Parsed};
use crate::graph::Graph;

static EDGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\s*(->|→|-)\s*([A-Za-z0-9_]+)").expect("invalid edge pattern")
});

static PAIR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\s*,\s*([A-Za-z0-9_]+)").expect("invalid pair pattern")
});

pub(crate) struct EdgeListRule;

impl ParseRule for EdgeListRule {
    fn name(&self) -> &'static str {
        "edge-list"
    }

    fn try_parse(&self, text: &str) -> Option<Parsed> {
        let undirected_hint = text.to_lowercase().contains("undirected");
        let mut graph = Graph::new();
        let mut matched = false;

        for caps in EDGE_PATTERN.captures_iter(text) {
            matched = true;
            let (from, to) = (&caps[1], &caps[3]);
            if &caps[2] == "-" || undirected_hint {
                graph.add_undirected_edge(from, to);
            } else {
                graph.add_edge(from, to);
            }
        }

        if !matched {
            for caps in PAIR_PATTERN.captures_iter(text) {
                matched = true;
                graph.add_undirected_edge(&caps[1], &caps[2]);
            }
        }

        if matched { Some(Parsed::Graph(graph)) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_graph(text: &str) -> Graph {
        match EdgeListRule.try_parse(text) {
            Some(Parsed::Graph(graph)) => graph,
            other => panic!("expected a canonical graph, got {other:?}"),
        }
    }

    #[test]
    fn dash_edges_are_symmetrized() {
        let graph = parse_graph("A-B, B-C, C-D");
        assert_eq!(graph.nodes(), ["A", "B", "C", "D"]);
        assert_eq!(graph.degree("A"), 1);
        assert_eq!(graph.degree("B"), 2);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn arrow_edges_stay_directed() {
        let graph = parse_graph("A -> B, B -> C");
        assert_eq!(graph.neighbors("A"), ["B".to_string()]);
        assert!(graph.neighbors("B").iter().all(|n| n == "C"));
        assert!(graph.neighbors("C").is_empty());
    }

    #[test]
    fn unicode_arrow_is_accepted() {
        let graph = parse_graph("A → B");
        assert_eq!(graph.neighbors("A"), ["B".to_string()]);
        assert!(graph.neighbors("B").is_empty());
    }

    #[test]
    fn undirected_keyword_symmetrizes_arrows() {
        let graph = parse_graph("undirected graph: A -> B");
        assert_eq!(graph.neighbors("B"), ["A".to_string()]);
    }

    #[test]
    fn comma_pairs_are_a_fallback() {
        let graph = parse_graph("A, B\nC, D");
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors("B"), ["A".to_string()]);
    }

    #[test]
    fn comma_fallback_is_skipped_when_dashes_match() {
        // "B, B" must not become a self-loop once dash pairs are found.
        let graph = parse_graph("A-B, B-C");
        assert!(!graph.neighbors("B").contains(&"B".to_string()));
    }

    #[test]
    fn prose_without_pairs_does_not_match() {
        assert!(EdgeListRule.try_parse("no separators here").is_none());
    }
}
