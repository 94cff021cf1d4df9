//! Average clustering coefficient over out-neighbourhoods.
//!
//! For a vertex `v` with out-neighbours `N(v)`, the closed pairs are the ordered pairs
//! `(j, k) ∈ N(v) × N(v)` with an edge `j → k`. The vertex contributes
//! `closed / (2 · |N(v)|(|N(v)| - 1) / 2)`, which is `1.0` when every neighbour points at every
//! other neighbour. Vertices with fewer than two neighbours contribute nothing, and the sum is
//! averaged over all vertices.
//!
//! # Examples
//!
//! ```rust
//! use netscope::algorithms::metrics::clustering_coefficient::average_clustering_undirected;
//! use netscope::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("a", "b");
//! builder.add_edge("b", "c");
//! builder.add_edge("c", "a");
//! let g = builder.build();
//!
//! assert_eq!(average_clustering_undirected(&g), 1.0);
//! ```

use crate::{db::graph::DiGraph, errors::GraphError};
use netscope_api::core::entities::{NodeId, VID};

/// Average clustering using the graph's out-neighbourhoods as they are.
pub fn average_clustering<V: NodeId>(g: &DiGraph<V>) -> f64 {
    let n = g.count_nodes();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = g.vids().map(|v| clustering_of(g, v)).sum();
    total / n as f64
}

/// Average clustering of the symmetrised graph, where every edge counts in both directions.
pub fn average_clustering_undirected<V: NodeId>(g: &DiGraph<V>) -> f64 {
    average_clustering(&g.to_undirected())
}

/// Clustering coefficient of a single vertex.
pub fn local_clustering_coefficient<V: NodeId>(
    g: &DiGraph<V>,
    v: &V,
) -> Result<f64, GraphError> {
    let vid = g.vid(v).ok_or_else(|| GraphError::undefined_vertex(v))?;
    Ok(clustering_of(g, vid))
}

/// Ordered neighbour pairs `(j, k)` of `v` with an edge `j -> k`.
pub(crate) fn closed_pairs<V: NodeId>(g: &DiGraph<V>, v: VID) -> usize {
    let neighbours = g.out_vids(v);
    neighbours
        .iter()
        .map(|j| {
            let out_j = g.out_vids(*j);
            neighbours.iter().filter(|k| out_j.contains(*k)).count()
        })
        .sum()
}

fn clustering_of<V: NodeId>(g: &DiGraph<V>, v: VID) -> f64 {
    let degree = g.out_vids(v).len();
    let pairs = degree * degree.saturating_sub(1) / 2;
    if pairs == 0 {
        return 0.0;
    }
    closed_pairs(g, v) as f64 / (2 * pairs) as f64
}
