//! Small-world graphs: dense local "strong ties" plus a few random "weak ties" per vertex.

use crate::{
    db::graph::{DiGraph, GraphBuilder},
    errors::GraphError,
    graphgen::seeded_rng,
};
use rand::Rng;
use tracing::debug;

/// Small-world graph on a square grid.
///
/// The `⌊√n⌋²` vertices are laid out row by row, vertex `row * side + col`. Each vertex links
/// to every other vertex whose row and column both differ from its own by at most `r`, and
/// then makes `k` extra links to uniformly random vertices. Draws that hit the vertex itself
/// are discarded.
///
/// # Examples
///
/// ```
/// use netscope::graphgen::watts_strogatz::ws_grid;
///
/// let g = ws_grid(9, 1, 0, Some(1)).unwrap();
/// assert_eq!(g.count_nodes(), 9);
/// // the centre of a 3x3 grid is adjacent to everything else
/// assert_eq!(g.out_degree(&4).unwrap(), 8);
/// ```
pub fn ws_grid(
    n: usize,
    r: usize,
    k: usize,
    seed: Option<u64>,
) -> Result<DiGraph<u64>, GraphError> {
    let side = n.isqrt();
    let num_nodes = side * side;
    let mut rng = seeded_rng(seed);
    let mut builder = GraphBuilder::with_capacity(num_nodes);
    for v in 0..num_nodes as u64 {
        builder.add_node(v);
    }

    let id = |row: usize, col: usize| (row * side + col) as u64;
    for row in 0..side {
        for col in 0..side {
            let v = id(row, col);
            let rows = row.saturating_sub(r)..=(row + r).min(side - 1);
            for other_row in rows {
                let cols = col.saturating_sub(r)..=(col + r).min(side - 1);
                for other_col in cols {
                    builder.add_edge(v, id(other_row, other_col));
                }
            }
            add_weak_ties(&mut builder, &mut rng, v, num_nodes, k);
        }
    }

    debug!(
        num_nodes,
        num_edges = builder.count_edges(),
        "generated grid small-world graph"
    );
    Ok(builder.build())
}

/// Small-world graph on random points in the plane.
///
/// The `n` vertices are scattered uniformly over a square of side `⌊√n⌋`. Any two vertices at
/// Euclidean distance at most `r` are linked in both directions, then every vertex makes `k`
/// links to uniformly random vertices as in [`ws_grid`].
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `r` is negative or NaN.
pub fn ws_2d(n: usize, r: f64, k: usize, seed: Option<u64>) -> Result<DiGraph<u64>, GraphError> {
    if r.is_nan() || r < 0.0 {
        return Err(GraphError::InvalidParameter {
            name: "r",
            reason: format!("expected a non-negative radius, got {r}"),
        });
    }
    let side = n.isqrt() as f64;
    let mut rng = seeded_rng(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen::<f64>() * side, rng.gen::<f64>() * side))
        .collect();

    let mut builder = GraphBuilder::with_capacity(n);
    for v in 0..n as u64 {
        builder.add_node(v);
    }
    for (i, (xi, yi)) in points.iter().enumerate() {
        for (j, (xj, yj)) in points.iter().enumerate().skip(i + 1) {
            if (xi - xj).hypot(yi - yj) <= r {
                builder.add_edge(i as u64, j as u64);
                builder.add_edge(j as u64, i as u64);
            }
        }
        add_weak_ties(&mut builder, &mut rng, i as u64, n, k);
    }

    debug!(
        num_nodes = n,
        num_edges = builder.count_edges(),
        "generated 2d small-world graph"
    );
    Ok(builder.build())
}

fn add_weak_ties<R: Rng>(
    builder: &mut GraphBuilder<u64>,
    rng: &mut R,
    v: u64,
    num_nodes: usize,
    k: usize,
) {
    for _ in 0..k {
        let target = rng.gen_range(0..num_nodes as u64);
        if target != v {
            builder.add_edge(v, target);
        }
    }
}
