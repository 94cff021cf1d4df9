use netscope::{
    algorithms::{
        centrality::{top_centers, Centrality},
        metrics::diameter::component_summary,
    },
    graphgen::{
        preferential_attachment::{
            directed_preferential_attachment, directed_preferential_attachment_with_edge_budget,
        },
        random_graph::{random_digraph, random_digraph_with_edge_budget},
        watts_strogatz::{ws_2d, ws_grid},
    },
    prelude::*,
};

#[test]
fn generators_validate_probabilities() {
    assert!(matches!(
        random_digraph(10, -0.5, None),
        Err(GraphError::InvalidParameter { .. })
    ));
    assert!(random_digraph_with_edge_budget(10, 2.0, 1, 2, None).is_err());
    assert!(directed_preferential_attachment(10, 2, 1.01, None).is_err());
    assert!(directed_preferential_attachment_with_edge_budget(10, 2, -1.0, 1, 2, None).is_err());
}

#[test]
fn grid_diameter() {
    // 4x4 grid where every vertex reaches its eight surrounding cells
    let graph = ws_grid(16, 1, 0, Some(0)).unwrap();
    let summary = component_summary(&graph);
    assert_eq!(summary.largest_component_nodes, 16);
    assert_eq!(summary.diameter, 3);
}

#[test]
fn generated_graphs_feed_the_analytics() {
    let graphs = [
        random_digraph(60, 0.05, Some(1)).unwrap(),
        random_digraph_with_edge_budget(60, 0.3, 100, 150, Some(1)).unwrap(),
        directed_preferential_attachment(60, 3, 0.4, Some(1)).unwrap(),
        directed_preferential_attachment_with_edge_budget(60, 3, 0.4, 80, 120, Some(1))
            .unwrap(),
        ws_grid(64, 1, 2, Some(1)).unwrap(),
        ws_2d(60, 1.0, 2, Some(1)).unwrap(),
    ];
    for graph in graphs.iter() {
        let top = top_centers(graph, 5, Centrality::Betweenness).unwrap();
        assert_eq!(top.len(), 5);
        assert!(top.scores.iter().all(|s| s.is_finite() && *s >= 0.0));
        assert!(graph.edges().all(|(src, dst)| src != dst));
    }
}
