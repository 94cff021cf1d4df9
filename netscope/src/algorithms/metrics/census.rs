use crate::{
    algorithms::metrics::clustering_coefficient::{average_clustering, closed_pairs},
    db::graph::DiGraph,
};
use netscope_api::core::entities::NodeId;
use serde::{Deserialize, Serialize};

/// Small-pattern counts over out-neighbourhoods.
///
/// The halving and sixth-ing below assume every pattern is seen from each of its symmetric
/// positions, so the counts are exact on symmetric graphs and estimates otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphCensus {
    /// Summed out-degree, halved.
    pub edges: usize,
    /// Closed neighbour pairs, divided by six.
    pub triangles: usize,
    /// Paths `i -> j -> k` with `k != i`, halved.
    pub two_paths: usize,
    /// Same as [`average_clustering`].
    pub average_clustering: f64,
}

pub fn graph_census<V: NodeId>(g: &DiGraph<V>) -> GraphCensus {
    let mut degree_sum = 0usize;
    let mut closed = 0usize;
    let mut paths = 0usize;

    for v in g.vids() {
        let neighbours = g.out_vids(v);
        degree_sum += neighbours.len();
        closed += closed_pairs(g, v);
        paths += neighbours
            .iter()
            .map(|j| g.out_vids(*j).iter().filter(|k| **k != v).count())
            .sum::<usize>();
    }

    GraphCensus {
        edges: degree_sum / 2,
        triangles: closed / 6,
        two_paths: paths / 2,
        average_clustering: average_clustering(g),
    }
}
