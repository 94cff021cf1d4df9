use netscope::{
    algorithms::metrics::{
        census::graph_census,
        clustering_coefficient::{average_clustering, average_clustering_undirected},
        diameter::{component_summary, diameter},
    },
    prelude::*,
};
use pretty_assertions::assert_eq;

use super::{path, symmetric_cycle};

#[test]
fn symmetric_cycle_diameter_is_half_its_length() {
    for n in [3u64, 4, 7, 8, 11] {
        let graph = symmetric_cycle(n);
        let summary = component_summary(&graph);
        assert_eq!(summary.diameter, (n / 2) as usize, "cycle of {n}");
        assert_eq!(summary.largest_component_nodes, n as usize);
        assert_eq!(summary.largest_component_edges, n as usize);
    }
}

#[test]
fn directed_path_only_reaches_forwards() {
    let graph = path(&["a", "b", "c", "d", "e"]);
    assert_eq!(diameter(&graph), 4);
    assert_eq!(diameter(&graph.to_undirected()), 4);
    assert_eq!(component_summary(&graph).largest_component_nodes, 5);
}

#[test]
fn triangle_is_fully_clustered() {
    let graph = path(&["a", "b", "c", "a"]);
    assert_eq!(average_clustering_undirected(&graph), 1.0);
    assert_eq!(average_clustering(&graph), 0.0);
}

#[test]
fn census_of_a_symmetric_cycle() {
    let census = graph_census(&symmetric_cycle(6));
    assert_eq!(census.edges, 6);
    assert_eq!(census.triangles, 0);
    assert_eq!(census.two_paths, 6);
    assert_eq!(census.average_clustering, 0.0);
}

#[test]
fn empty_graph_metrics() {
    let graph = GraphBuilder::<String>::new().build();
    assert_eq!(diameter(&graph), 0);
    assert_eq!(average_clustering(&graph), 0.0);
    assert_eq!(graph_census(&graph).edges, 0);
}
