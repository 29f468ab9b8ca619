//! Graph data for display: nodes carry the final sentence ranks, links
//! mirror the adjacency of the similarity graph. Ids are 1-based to match
//! the wire format consumed by graph renderers.

use std::collections::BTreeSet;

use super::models::{GraphLink, GraphNode};

/// One node per sentence, id = index + 1, rank = final normalized score
pub fn create_graph_nodes(scores: &[f64]) -> Vec<GraphNode> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &rank)| GraphNode { id: i + 1, rank })
        .collect()
}

/// One link per adjacency entry; undirected edges appear in both directions
pub fn create_graph_links(graph: &[BTreeSet<usize>]) -> Vec<GraphLink> {
    let mut links = Vec::new();
    for (source, neighbors) in graph.iter().enumerate() {
        for &target in neighbors {
            links.push(GraphLink {
                source: source + 1,
                target: target + 1,
            });
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_are_one_based() {
        let nodes = create_graph_nodes(&[0.3, 0.7]);
        assert_eq!(nodes[0].id, 1);
        assert_eq!(nodes[1].id, 2);
        assert!((nodes[1].rank - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_links_cover_both_directions() {
        let mut graph = vec![BTreeSet::new(), BTreeSet::new()];
        graph[0].insert(1);
        graph[1].insert(0);

        let links = create_graph_links(&graph);
        assert_eq!(links.len(), 2);
        assert!(links
            .iter()
            .any(|link| link.source == 1 && link.target == 2));
        assert!(links
            .iter()
            .any(|link| link.source == 2 && link.target == 1));
    }
}
