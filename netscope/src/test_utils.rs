use crate::db::graph::{DiGraph, GraphBuilder};
use proptest::prelude::*;

pub fn build_edge_list(len: usize, num_nodes: u64) -> impl Strategy<Value = Vec<(u64, u64)>> {
    proptest::collection::vec((0..num_nodes, 0..num_nodes), 0..=len)
}

pub fn build_graph_from_edge_list(edges: &[(u64, u64)]) -> DiGraph<u64> {
    let mut builder = GraphBuilder::new();
    for (src, dst) in edges {
        builder.add_edge(*src, *dst);
    }
    builder.build()
}

pub fn build_graph_strat(len: usize, num_nodes: u64) -> impl Strategy<Value = DiGraph<u64>> {
    build_edge_list(len, num_nodes).prop_map(|edges| build_graph_from_edge_list(&edges))
}

pub fn build_scores(len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(prop_oneof![Just(0.0), Just(1.0), -10.0..10.0f64], 0..=len)
}
