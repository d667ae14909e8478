//! Shortest path (BFS) and bounded all-paths enumeration (explicit-stack
//! DFS) between two named nodes.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::require_node;
use crate::error::GraphError;
use crate::graph::Graph;

/// Combined result of the `path_analysis` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathAnalysis {
    pub start: String,
    pub end: String,
    pub shortest: Option<Vec<String>>,
    pub paths: Vec<Vec<String>>,
    /// Enumeration stopped at the cap; more paths may exist.
    pub truncated: bool,
}

/// Breadth-first search expanding neighbors in adjacency insertion order;
/// the first path discovered to `end` has minimum edge count. `None` when
/// `end` is unreachable.
pub fn shortest_path(
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<Option<Vec<String>>, GraphError> {
    require_node(graph, start)?;
    require_node(graph, end)?;

    if start == end {
        return Ok(Some(vec![start.to_string()]));
    }

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut predecessor: HashMap<&str, &str> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor.as_str()) {
                predecessor.insert(neighbor, current);
                if neighbor == end {
                    return Ok(Some(backtrack(&predecessor, start, end)));
                }
                queue.push_back(neighbor);
            }
        }
    }

    Ok(None)
}

fn backtrack(predecessor: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        if let Some(&previous) = predecessor.get(current) {
            path.push(previous.to_string());
            current = previous;
        } else {
            break;
        }
    }
    path.reverse();
    path
}

/// Depth-first enumeration of simple paths from `start` to `end`, in
/// adjacency insertion order, stopping as soon as `max_paths` have been
/// collected. The visited set is restored on backtrack, so a node excluded
/// on one branch is eligible again on another.
pub fn all_paths(
    graph: &Graph,
    start: &str,
    end: &str,
    max_paths: usize,
) -> Result<Vec<Vec<String>>, GraphError> {
    require_node(graph, start)?;
    require_node(graph, end)?;

    let mut results = Vec::new();
    if max_paths == 0 {
        return Ok(results);
    }
    if start == end {
        results.push(vec![start.to_string()]);
        return Ok(results);
    }

    // One frame per node on the current path: the index of the next
    // neighbor to try.
    let mut frames: Vec<usize> = vec![0];
    let mut path: Vec<&str> = vec![start];
    let mut visited: HashSet<&str> = HashSet::from([start]);

    while let Some(depth) = frames.len().checked_sub(1) {
        if results.len() >= max_paths {
            break;
        }
        let current = path[depth];
        let neighbors = graph.neighbors(current);
        let index = frames[depth];
        if index >= neighbors.len() {
            frames.pop();
            if let Some(done) = path.pop() {
                visited.remove(done);
            }
            continue;
        }
        frames[depth] += 1;

        let next = neighbors[index].as_str();
        if visited.contains(next) {
            continue;
        }
        if next == end {
            let mut found: Vec<String> = path.iter().map(|node| node.to_string()).collect();
            found.push(next.to_string());
            results.push(found);
            continue;
        }
        path.push(next);
        visited.insert(next);
        frames.push(0);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_chord() -> Graph {
        let mut graph = Graph::new();
        graph.add_undirected_edge("A", "B");
        graph.add_undirected_edge("B", "C");
        graph.add_undirected_edge("A", "C");
        graph
    }

    #[test]
    fn shortest_path_prefers_the_direct_edge() {
        let graph = triangle_with_chord();
        let path = shortest_path(&graph, "A", "C").unwrap().unwrap();
        assert_eq!(path, ["A", "C"], "one hop beats the detour through B");
    }

    #[test]
    fn shortest_path_to_self_is_the_single_node() {
        let graph = triangle_with_chord();
        let path = shortest_path(&graph, "B", "B").unwrap().unwrap();
        assert_eq!(path, ["B"]);
    }

    #[test]
    fn unreachable_end_yields_none() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("C", "D");
        assert!(shortest_path(&graph, "A", "D").unwrap().is_none());
    }

    #[test]
    fn shortest_path_length_matches_bfs_layers() {
        // A-B-C-D-E chain plus a B-D chord: dist(A, E) drops from 4 to 3.
        let mut graph = Graph::new();
        for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")] {
            graph.add_undirected_edge(a, b);
        }
        graph.add_undirected_edge("B", "D");
        let path = shortest_path(&graph, "A", "E").unwrap().unwrap();
        assert_eq!(path.len() - 1, 3);
        assert_eq!(path, ["A", "B", "D", "E"]);
    }

    #[test]
    fn unknown_endpoint_is_reported_with_known_nodes() {
        let graph = triangle_with_chord();
        let err = shortest_path(&graph, "A", "Q").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'Q'"));
        assert!(message.contains('A'), "valid nodes are listed: {message}");
    }

    #[test]
    fn all_paths_enumerates_simple_paths() {
        let graph = triangle_with_chord();
        let paths = all_paths(&graph, "A", "C", 10).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec!["A".to_string(), "C".to_string()]));
        assert!(paths.contains(&vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string()
        ]));
    }

    #[test]
    fn all_paths_follows_adjacency_insertion_order() {
        let graph = triangle_with_chord();
        let paths = all_paths(&graph, "A", "C", 10).unwrap();
        // A's adjacency lists B before C, so the detour is found first.
        assert_eq!(paths[0], vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    }

    #[test]
    fn all_paths_respects_the_cap() {
        // K5-ish density: many simple paths between two nodes.
        let labels = ["A", "B", "C", "D", "E"];
        let mut graph = Graph::new();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                graph.add_undirected_edge(a, b);
            }
        }
        let paths = all_paths(&graph, "A", "E", 3).unwrap();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn visited_set_is_restored_between_branches() {
        // Diamond: A->B->D and A->C->D both pass through D's predecessors
        // independently.
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("C", "D");
        let paths = all_paths(&graph, "A", "D", 10).unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn zero_cap_enumerates_nothing() {
        let graph = triangle_with_chord();
        assert!(all_paths(&graph, "A", "C", 0).unwrap().is_empty());
    }
}
