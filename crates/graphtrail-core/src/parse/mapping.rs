//! Mapping-form rule: a brace-delimited adjacency mapping such as
//! `{"A": ["B", "C"], "B": ["A"]}`. Single-quoted variants are normalized
//! before parsing. Keys become nodes in literal order; each (key, element)
//! pair is one directed edge.

use serde_json::Value;

use super::{ParseRule, Parsed};
use crate::graph::Graph;

pub(crate) struct MappingRule;

impl ParseRule for MappingRule {
    fn name(&self) -> &'static str {
        "mapping"
    }

    fn try_parse(&self, text: &str) -> Option<Parsed> {
        let open = text.find('{')?;
        let close = text.rfind('}')?;
        if close < open {
            return None;
        }

        let candidate = text[open..=close].replace('\'', "\"");
        let value: Value = serde_json::from_str(&candidate).ok()?;
        let object = value.as_object()?;

        let mut graph = Graph::new();
        let mut edge_seen = false;
        for (node, neighbors) in object {
            graph.add_node(node);
            for neighbor in neighbors.as_array()? {
                graph.add_edge(node, &scalar_label(neighbor)?);
                edge_seen = true;
            }
        }

        if edge_seen {
            Some(Parsed::Graph(graph))
        } else {
            None
        }
    }
}

fn scalar_label(value: &Value) -> Option<String> {
    match value {
        Value::String(label) => Some(label.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
