//! Katz centrality: influence via attenuated path counting.
//!
//! Two iterations are provided. They differ in which way centrality flows along an edge:
//!
//! * [`katz_centrality`] pulls from out-neighbours, `K(v) = α Σ_{v→u} (K(u) + 1)`. A vertex is
//!   central when it points at central vertices.
//! * [`katz_spread_centrality`] pushes to out-neighbours, `K(v) = α Σ_{u→v} (K(u) + 1)`. A
//!   vertex is central when central vertices point at it.
//!
//! Both normalise every iteration by the largest tentative score, so the attenuation factor
//! only shapes the relative scores.

use crate::{
    algorithms::{
        algorithm_result::AlgorithmResult,
        centrality::{power_iteration, KatzParams},
    },
    db::graph::DiGraph,
    errors::GraphError,
};
use netscope_api::core::entities::NodeId;

/// Katz centrality accumulated from out-neighbours, starting from all-zero scores.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `params` fails validation.
pub fn katz_centrality<V: NodeId>(
    g: &DiGraph<V>,
    params: KatzParams,
) -> Result<AlgorithmResult<V>, GraphError> {
    params.validate()?;
    let alpha = params.alpha;

    let (scores, convergence) = power_iteration::iterate(
        "Katz Centrality",
        vec![0.0; g.count_nodes()],
        params.confidence,
        params.max_iterations,
        |prev, next| {
            for v in g.vids() {
                let sum: f64 = g.out_vids(v).iter().map(|u| prev[u.index()] + 1.0).sum();
                next[v.index()] = alpha * sum;
            }
            power_iteration::normalise_by_max(next);
        },
    );

    Ok(AlgorithmResult::new(
        g,
        "Katz Centrality",
        scores,
        convergence,
    ))
}

/// Katz centrality spread to out-neighbours, starting from all-one scores.
///
/// Every vertex pushes its previous score plus one onto each of its out-neighbours, so the
/// score of a vertex is driven by its in-neighbours. Iteration stops at convergence or when the
/// iteration budget is spent, whichever comes first.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] if `params` fails validation.
pub fn katz_spread_centrality<V: NodeId>(
    g: &DiGraph<V>,
    params: KatzParams,
) -> Result<AlgorithmResult<V>, GraphError> {
    params.validate()?;
    let alpha = params.alpha;

    let (scores, convergence) = power_iteration::iterate(
        "Katz Spread Centrality",
        vec![1.0; g.count_nodes()],
        params.confidence,
        params.max_iterations,
        |prev, next| {
            next.fill(0.0);
            for v in g.vids() {
                let spread = prev[v.index()] + 1.0;
                for u in g.out_vids(v) {
                    next[u.index()] += spread;
                }
            }
            next.iter_mut().for_each(|k| *k *= alpha);
            power_iteration::normalise_by_max(next);
        },
    );

    Ok(AlgorithmResult::new(
        g,
        "Katz Spread Centrality",
        scores,
        convergence,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::graph::GraphBuilder;

    fn path() -> DiGraph<&'static str> {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b");
        builder.add_edge("b", "c");
        builder.build()
    }

    #[test]
    fn pull_favours_the_head_of_a_path() {
        let result = katz_centrality(&path(), KatzParams::default()).unwrap();
        assert!(result.is_converged());
        let (a, b, c) = (
            result.get(&"a").unwrap(),
            result.get(&"b").unwrap(),
            result.get(&"c").unwrap(),
        );
        assert_eq!(a, 1.0);
        assert!(a > b && b > c);
        assert_eq!(c, 0.0);
        // b / a tends to the golden ratio conjugate
        assert!((b - 0.618_034).abs() < 1e-4);
    }

    #[test]
    fn spread_favours_the_tail_of_a_path() {
        let result = katz_spread_centrality(&path(), KatzParams::default()).unwrap();
        assert!(result.is_converged());
        let (a, b, c) = (
            result.get(&"a").unwrap(),
            result.get(&"b").unwrap(),
            result.get(&"c").unwrap(),
        );
        assert_eq!(c, 1.0);
        assert!(c > b && b > a);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn isolated_vertices_score_zero() {
        let mut builder = GraphBuilder::new();
        builder.add_node(1u64);
        builder.add_node(2);
        let g = builder.build();
        for result in [
            katz_centrality(&g, KatzParams::default()).unwrap(),
            katz_spread_centrality(&g, KatzParams::default()).unwrap(),
        ] {
            assert!(result.is_converged());
            assert!(result.values().all(|v| v == 0.0));
        }
    }

    #[test]
    fn rejects_non_positive_alpha() {
        let params = KatzParams {
            alpha: 0.0,
            ..KatzParams::default()
        };
        assert!(katz_centrality(&path(), params).is_err());
        assert!(katz_spread_centrality(&path(), params).is_err());
    }
}
