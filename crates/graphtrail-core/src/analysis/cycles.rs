//! Best-effort cycle detection.
//!
//! Depth-first search with a recursion stack; a cycle is recorded whenever
//! the search steps to a node already on the stack, as the stack slice from
//! that node to the current one. Distinct simple cycles sharing a segment
//! can both be reported (this is not a minimal cycle basis), and undirected
//! input reports a two-node cycle per symmetrized edge.

use std::collections::HashSet;

use crate::graph::Graph;

struct Frame<'a> {
    node: &'a str,
    /// Path at entry, not yet including this node. Each branch carries its
    /// own copy so sibling branches do not interfere.
    path: Vec<&'a str>,
    next: usize,
    entered: bool,
}

/// Full listing; display truncation is the formatter's concern.
pub fn cycles(graph: &Graph) -> Vec<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut found: Vec<Vec<String>> = Vec::new();

    for root in graph.nodes() {
        if visited.contains(root.as_str()) {
            continue;
        }
        let mut frames = vec![Frame {
            node: root.as_str(),
            path: Vec::new(),
            next: 0,
            entered: false,
        }];

        while let Some(top) = frames.len().checked_sub(1) {
            if !frames[top].entered {
                let node = frames[top].node;
                if on_stack.contains(node) {
                    if let Some(position) = frames[top].path.iter().position(|n| *n == node) {
                        found.push(
                            frames[top].path[position..]
                                .iter()
                                .map(|n| n.to_string())
                                .collect(),
                        );
                    }
                    frames.pop();
                    continue;
                }
                if visited.contains(node) {
                    frames.pop();
                    continue;
                }
                visited.insert(node);
                on_stack.insert(node);
                let owned = frames[top].node;
                frames[top].path.push(owned);
                frames[top].entered = true;
            }

            let node = frames[top].node;
            let neighbors = graph.neighbors(node);
            let index = frames[top].next;
            if index >= neighbors.len() {
                on_stack.remove(node);
                frames.pop();
                continue;
            }
            frames[top].next += 1;

            let branch_path = frames[top].path.clone();
            frames.push(Frame {
                node: neighbors[index].as_str(),
                path: branch_path,
                next: 0,
                entered: false,
            });
        }
    }

    found
}
