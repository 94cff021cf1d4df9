use crate::{
    algorithms::algorithm_result::{AlgorithmResult, Convergence},
    db::graph::DiGraph,
};
use netscope_api::core::entities::{NodeId, VID};
use std::collections::VecDeque;
use tracing::debug;

/// Scratch space for the single-source phase, reused across sources.
struct SourceState {
    stack: Vec<VID>,
    queue: VecDeque<VID>,
    predecessors: Vec<Vec<VID>>,
    sigma: Vec<f64>,
    dist: Vec<i64>,
    delta: Vec<f64>,
}

impl SourceState {
    fn new(n: usize) -> Self {
        Self {
            stack: Vec::with_capacity(n),
            queue: VecDeque::with_capacity(n),
            predecessors: vec![Vec::new(); n],
            sigma: vec![0.0; n],
            dist: vec![-1; n],
            delta: vec![0.0; n],
        }
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.queue.clear();
        self.predecessors.iter_mut().for_each(|p| p.clear());
        self.sigma.fill(0.0);
        self.dist.fill(-1);
        self.delta.fill(0.0);
    }
}

/// Computes the betweenness centrality for vertices in a given graph.
///
/// Brandes' algorithm on the directed, unweighted graph: one breadth-first search per source
/// counts shortest paths, then dependencies are accumulated in reverse visiting order. The
/// values are raw pair-dependency sums, not normalised.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
///
/// # Returns
///
/// An [AlgorithmResult] with the betweenness of every vertex.
pub fn betweenness_centrality<V: NodeId>(g: &DiGraph<V>) -> AlgorithmResult<V> {
    let n = g.count_nodes();
    let mut betweenness: Vec<f64> = vec![0.0; n];
    let mut state = SourceState::new(n);

    for source in g.vids() {
        state.reset();
        accumulate_source(g, source, &mut state);

        // the per-source dependencies only land in the total once the source is done
        for (total, dependency) in betweenness.iter_mut().zip(state.delta.iter()) {
            *total += dependency;
        }
    }

    debug!(num_nodes = n, "betweenness centrality computed");
    AlgorithmResult::new(g, "Betweenness Centrality", betweenness, Convergence::Exact)
}

fn accumulate_source<V: NodeId>(g: &DiGraph<V>, source: VID, state: &mut SourceState) {
    let s = source.index();
    state.dist[s] = 0;
    state.sigma[s] = 1.0;
    state.queue.push_back(source);

    // BFS loop to find shortest paths.
    while let Some(current) = state.queue.pop_front() {
        state.stack.push(current);
        let c = current.index();
        for neighbour in g.out_vids(current) {
            let w = neighbour.index();
            // Path discovery
            if state.dist[w] < 0 {
                state.queue.push_back(*neighbour);
                state.dist[w] = state.dist[c] + 1;
            }
            // Path counting
            if state.dist[w] == state.dist[c] + 1 {
                state.sigma[w] += state.sigma[c];
                state.predecessors[w].push(current);
            }
        }
    }

    // Accumulation
    while let Some(w) = state.stack.pop() {
        let coeff = 1.0 + state.delta[w.index()];
        let sigma_w = state.sigma[w.index()];
        for v in state.predecessors[w.index()].iter() {
            state.delta[v.index()] += state.sigma[v.index()] / sigma_w * coeff;
        }
    }
    // the source is never on a path between itself and another vertex
    state.delta[s] = 0.0;
}
