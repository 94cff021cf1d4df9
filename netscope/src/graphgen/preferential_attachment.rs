//! Directed preferential attachment, where popular vertices keep attracting links.
//!
//! # Examples
//!
//! ```
//! use netscope::graphgen::preferential_attachment::directed_preferential_attachment;
//!
//! let g = directed_preferential_attachment(1000, 5, 0.2, Some(3)).unwrap();
//! assert_eq!(g.count_nodes(), 1000);
//! ```

use crate::{
    db::graph::{DiGraph, GraphBuilder},
    errors::GraphError,
    graphgen::{seeded_rng, validate_edge_bounds, validate_probability},
};
use rand::Rng;
use tracing::debug;

/// Generates a graph on `0..n` where each vertex makes `d` linking attempts.
///
/// Each attempt, with probability `p`, targets a vertex chosen uniformly at random. Otherwise
/// the target is drawn from the list of previously chosen targets, so a vertex is picked with
/// probability proportional to the in-links it has received so far. Attempts that land on the
/// linking vertex itself are discarded, and every other target is appended to that list.
///
/// Out-degrees are therefore at most `d`.
pub fn directed_preferential_attachment(
    n: usize,
    d: usize,
    p: f64,
    seed: Option<u64>,
) -> Result<DiGraph<u64>, GraphError> {
    validate_probability("p", p)?;
    let mut rng = seeded_rng(seed);
    let mut builder = GraphBuilder::with_capacity(n);
    for i in 0..n as u64 {
        builder.add_node(i);
    }

    let mut popular: Vec<u64> = Vec::new();
    for i in 0..n as u64 {
        for _ in 0..d {
            let target = if rng.gen::<f64>() < p {
                rng.gen_range(0..n as u64)
            } else if !popular.is_empty() {
                popular[rng.gen_range(0..popular.len())]
            } else {
                continue;
            };
            if target != i {
                builder.add_edge(i, target);
                popular.push(target);
            }
        }
    }
    Ok(builder.build())
}

/// Preferential attachment in creation order, stopping once an edge budget is spent.
///
/// The budget is drawn uniformly from `[e_inf, e_sup]`. Vertex `i` only links to vertices
/// created before it: each of its `d` attempts, with probability `p`, targets one of `0..i`
/// uniformly, and otherwise a vertex drawn from the list of previous targets. Repeated links
/// are discarded without spending budget. The graph has at most `e_sup` edges, and fewer than
/// the budget when `n` and `d` cannot supply it.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `p` is not a probability or if `e_inf > e_sup`.
pub fn directed_preferential_attachment_with_edge_budget(
    n: usize,
    d: usize,
    p: f64,
    e_inf: usize,
    e_sup: usize,
    seed: Option<u64>,
) -> Result<DiGraph<u64>, GraphError> {
    validate_probability("p", p)?;
    validate_edge_bounds(e_inf, e_sup)?;
    let mut rng = seeded_rng(seed);
    let budget = rng.gen_range(e_inf..=e_sup);
    debug!(n, d, budget, "generating preferential attachment graph with edge budget");

    let mut builder = GraphBuilder::with_capacity(n);
    for i in 0..n as u64 {
        builder.add_node(i);
    }

    // every entry is a vertex created before the one currently linking
    let mut popular: Vec<u64> = Vec::new();
    'vertices: for i in 1..n as u64 {
        for _ in 0..d {
            if builder.count_edges() >= budget {
                break 'vertices;
            }
            let target = if rng.gen::<f64>() < p {
                rng.gen_range(0..i)
            } else if !popular.is_empty() {
                popular[rng.gen_range(0..popular.len())]
            } else {
                continue;
            };
            if builder.add_edge(i, target) {
                popular.push(target);
            }
        }
    }
    Ok(builder.build())
}
