//! Directed Erdős-Rényi style random graphs.
//!
//! # Examples
//!
//! ```
//! use netscope::graphgen::random_graph::random_digraph;
//!
//! let g = random_digraph(100, 0.05, Some(42)).unwrap();
//! assert_eq!(g.count_nodes(), 100);
//! ```

use crate::{
    db::graph::{DiGraph, GraphBuilder},
    errors::GraphError,
    graphgen::{seeded_rng, validate_edge_bounds, validate_probability},
};
use rand::Rng;
use tracing::debug;

/// Vertices `0..n`. For every pair `i < j` the edge `i -> j` is added with probability `p` and,
/// independently, so is `j -> i`.
pub fn random_digraph(n: usize, p: f64, seed: Option<u64>) -> Result<DiGraph<u64>, GraphError> {
    validate_probability("p", p)?;
    let mut rng = seeded_rng(seed);
    let mut builder = GraphBuilder::with_capacity(n);
    for i in 0..n as u64 {
        builder.add_node(i);
    }
    for i in 0..n as u64 {
        for j in (i + 1)..n as u64 {
            if rng.gen_bool(p) {
                builder.add_edge(i, j);
            }
            if rng.gen_bool(p) {
                builder.add_edge(j, i);
            }
        }
    }
    Ok(builder.build())
}

/// Random digraph on `0..n` with an edge count drawn uniformly from `[e_inf, e_sup]`.
///
/// The target is capped at `n(n-1)`, the number of possible edges. Edges are added by drawing
/// an absent ordered pair uniformly at random and keeping it with probability `p`, until the
/// target is reached.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `p` is not a probability, if `e_inf > e_sup`, or if
/// `p` is zero while a non-zero number of edges is requested.
pub fn random_digraph_with_edge_budget(
    n: usize,
    p: f64,
    e_inf: usize,
    e_sup: usize,
    seed: Option<u64>,
) -> Result<DiGraph<u64>, GraphError> {
    validate_probability("p", p)?;
    validate_edge_bounds(e_inf, e_sup)?;

    let mut rng = seeded_rng(seed);
    let target = rng
        .gen_range(e_inf..=e_sup)
        .min(n * n.saturating_sub(1));
    if target > 0 && p == 0.0 {
        return Err(GraphError::InvalidParameter {
            name: "p",
            reason: format!("cannot reach {target} edges when every edge is rejected"),
        });
    }
    debug!(n, target, "generating random digraph with edge budget");

    let mut builder = GraphBuilder::with_capacity(n);
    for i in 0..n as u64 {
        builder.add_node(i);
    }
    while builder.count_edges() < target {
        let (src, dst) = loop {
            let src = rng.gen_range(0..n as u64);
            let dst = rng.gen_range(0..n as u64);
            if src != dst && !builder.has_edge(&src, &dst) {
                break (src, dst);
            }
        };
        if rng.gen_bool(p) {
            builder.add_edge(src, dst);
        }
    }
    Ok(builder.build())
}
