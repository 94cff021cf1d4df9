use crate::{db::graph::DiGraph, errors::GraphError};
use indexmap::IndexMap;
use itertools::Itertools;
use netscope_api::core::entities::NodeId;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// How an algorithm that produced an [`AlgorithmResult`] terminated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Convergence {
    /// Computed directly, without iterating towards a fixed point.
    Exact,
    /// The change between two iterations fell below the requested confidence.
    Converged { iterations: usize, residual: f64 },
    /// The iteration budget ran out first. The scores are the last iterate.
    Exhausted { iterations: usize, residual: f64 },
}

impl Convergence {
    pub fn is_converged(&self) -> bool {
        !matches!(self, Convergence::Exhausted { .. })
    }

    pub fn iterations(&self) -> usize {
        match self {
            Convergence::Exact => 0,
            Convergence::Converged { iterations, .. } | Convergence::Exhausted { iterations, .. } => {
                *iterations
            }
        }
    }
}

/// An 'AlgorithmRepr' struct that represents the string output in the terminal after running an algorithm.
///
/// It returns the algorithm name, number of vertices in the graph, and the result type.
///
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmRepr {
    pub algo_name: &'static str,
    pub result_type: &'static str,
}

/// Scores computed by a centrality algorithm, one per vertex of the graph it ran on.
///
/// The scores are keyed by vertex identifier and iterate in the graph's vertex order. Every run
/// produces a fresh result owned by the caller.
#[derive(Clone, Debug)]
pub struct AlgorithmResult<V: NodeId> {
    pub algo_repr: AlgorithmRepr,
    result: IndexMap<V, f64>,
    convergence: Convergence,
}

impl<V: NodeId> AlgorithmResult<V> {
    /// Creates a new instance of `AlgorithmResult` from per-vertex values.
    ///
    /// Arguments:
    ///
    /// * `graph`: The graph the values were computed on.
    /// * `algo_name`: The name of the algorithm.
    /// * `values`: One value per vertex, indexed by the vertex's dense id.
    /// * `convergence`: How the computation terminated.
    pub(crate) fn new(
        graph: &DiGraph<V>,
        algo_name: &'static str,
        values: Vec<f64>,
        convergence: Convergence,
    ) -> Self {
        let result = graph.nodes().cloned().zip(values).collect();
        Self {
            algo_repr: AlgorithmRepr {
                algo_name,
                result_type: "f64",
            },
            result,
            convergence,
        }
    }

    /// Returns a formatted string representation of the algorithm.
    pub fn repr(&self) -> String {
        format!(
            "Algorithm Name: {}, Number of Vertices: {}, Result Type: {}",
            self.algo_repr.algo_name,
            self.result.len(),
            self.algo_repr.result_type
        )
    }

    pub fn get(&self, v: &V) -> Option<f64> {
        self.result.get(v).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&V, f64)> + '_ {
        self.result.iter().map(|(v, score)| (v, *score))
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.result.values().copied()
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    pub fn is_converged(&self) -> bool {
        self.convergence.is_converged()
    }

    /// Fails with [`GraphError::NonConvergence`] if the iteration budget was exhausted.
    pub fn into_converged(self) -> Result<Self, GraphError> {
        match self.convergence {
            Convergence::Exhausted {
                iterations,
                residual,
            } => Err(GraphError::NonConvergence {
                algorithm: self.algo_repr.algo_name,
                iterations,
                residual,
            }),
            _ => Ok(self),
        }
    }

    pub fn into_map(self) -> IndexMap<V, f64> {
        self.result
    }

    pub fn to_hashmap(&self) -> HashMap<V, f64> {
        self.result.iter().map(|(v, s)| (v.clone(), *s)).collect()
    }

    /// Sorts the `AlgorithmResult` by its values in ascending or descending order.
    ///
    /// The sort is stable, vertices with equal scores keep their graph order.
    pub fn sort_by_value(&self, reverse: bool) -> Vec<(&V, f64)> {
        self.iter()
            .sorted_by(|(_, a), (_, b)| {
                let order = OrderedFloat(*a).cmp(&OrderedFloat(*b));
                if reverse {
                    order.reverse()
                } else {
                    order
                }
            })
            .collect()
    }

    /// The `k` highest scoring vertices in descending score order.
    ///
    /// A single pass over the scores keeps a bounded, sorted list of the best candidates. A new
    /// candidate is placed in front of the first entry with a strictly lower score, so among
    /// equal scores the vertex seen first wins. The result has `min(k, len)` entries.
    pub fn top_k(&self, k: usize) -> TopK<V> {
        let mut top: Vec<(&V, OrderedFloat<f64>)> = Vec::with_capacity(k.min(self.len()) + 1);
        for (v, score) in self.iter() {
            let score = OrderedFloat(score);
            let pos = top.partition_point(|(_, s)| *s >= score);
            if pos < k {
                top.insert(pos, (v, score));
                top.truncate(k);
            }
        }
        let (vertices, scores) = top.into_iter().map(|(v, s)| (v.clone(), s.0)).unzip();
        TopK { vertices, scores }
    }

    /// Returns a tuple of the max result with its key
    pub fn max(&self) -> Option<(&V, f64)> {
        self.iter().max_by_key(|(_, score)| OrderedFloat(*score))
    }

    /// Returns a tuple of the min result with its key
    pub fn min(&self) -> Option<(&V, f64)> {
        self.iter().min_by_key(|(_, score)| OrderedFloat(*score))
    }
}

impl<V: NodeId> fmt::Display for AlgorithmResult<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}

/// Ranked vertices and their scores, best first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopK<V> {
    pub vertices: Vec<V>,
    pub scores: Vec<f64>,
}

impl<V> TopK<V> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.vertices.iter().zip(self.scores.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<f64>) {
        (self.vertices, self.scores)
    }
}
