use crate::{
    algorithms::{
        algorithm_result::AlgorithmResult,
        centrality::{power_iteration, EigenvectorParams},
    },
    db::graph::DiGraph,
    errors::GraphError,
};
use netscope_api::core::entities::NodeId;

/// Eigenvector centrality by power iteration over out-edges.
///
/// Every vertex starts at `1/|V|`. Each iteration a vertex's tentative score is its own previous
/// score plus the previous scores of its out-neighbours, and all scores are then divided by the
/// largest tentative score. Keeping the vertex's own score in the sum damps the iteration so it
/// settles on graphs where the plain adjacency iteration would oscillate, which makes this a
/// shifted variant of the textbook definition.
///
/// Iteration stops once the summed absolute change is below `params.confidence`, or after
/// `params.max_iterations` iterations, in which case the result reports
/// [`Convergence::Exhausted`](crate::algorithms::algorithm_result::Convergence::Exhausted).
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `params` fails validation.
pub fn eigenvector_centrality<V: NodeId>(
    g: &DiGraph<V>,
    params: EigenvectorParams,
) -> Result<AlgorithmResult<V>, GraphError> {
    params.validate()?;
    let n = g.count_nodes();
    let initial = vec![1.0 / n as f64; n];

    let (scores, convergence) = power_iteration::iterate(
        "Eigenvector Centrality",
        initial,
        params.confidence,
        params.max_iterations,
        |prev, next| {
            for v in g.vids() {
                next[v.index()] = prev[v.index()]
                    + g.out_vids(v).iter().map(|u| prev[u.index()]).sum::<f64>();
            }
            power_iteration::normalise_by_max(next);
        },
    );

    Ok(AlgorithmResult::new(
        g,
        "Eigenvector Centrality",
        scores,
        convergence,
    ))
}
