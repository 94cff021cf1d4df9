//! The linear threshold model of diffusion.
//!
//! Every vertex draws a private threshold uniformly from `[0, 1)`. Starting from a seed set,
//! each round activates every inactive vertex whose fraction of active out-neighbours exceeds
//! its threshold. A round's activations are all decided against the state at the start of the
//! round and applied together, so the outcome does not depend on vertex order. The process
//! stops at the first round that activates nobody.
//!
//! # Examples
//!
//! ```rust
//! use netscope::algorithms::diffusion::linear_threshold::LinearThreshold;
//! use netscope::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("b", "a");
//! builder.add_edge("c", "b");
//! let g = builder.build();
//!
//! let diffusion = LinearThreshold::new(&g)
//!     .seeds(["a"])
//!     .rng_seed(Some(42))
//!     .run()
//!     .unwrap();
//!
//! // a vertex whose only neighbour is active always activates
//! assert_eq!(diffusion.round_sizes(), &[1, 2, 3]);
//! ```

use crate::{db::adjacency::Adjacency, errors::GraphError};
use indexmap::{IndexMap, IndexSet};
use netscope_api::core::entities::NodeId;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Configures and runs a linear threshold simulation.
#[derive(Clone, Debug)]
pub struct LinearThreshold<'a, A: Adjacency> {
    adjacency: &'a A,
    seeds: Vec<A::Node>,
    rng_seed: Option<u64>,
}

impl<'a, A: Adjacency> LinearThreshold<'a, A> {
    pub fn new(adjacency: &'a A) -> Self {
        Self {
            adjacency,
            seeds: Vec::new(),
            rng_seed: None,
        }
    }

    /// The initially active vertices. Replaces any previously given seeds.
    pub fn seeds<I: IntoIterator<Item = A::Node>>(mut self, seeds: I) -> Self {
        self.seeds = seeds.into_iter().collect();
        self
    }

    /// Seed for the threshold generator; `None` draws from system entropy.
    pub fn rng_seed(mut self, rng_seed: Option<u64>) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Runs the simulation to its fixed point.
    ///
    /// Self-loops in the adjacency are ignored.
    ///
    /// # Errors
    ///
    /// [`GraphError::UndefinedVertex`] if a seed is not a vertex, or if some vertex lists a
    /// neighbour that is not itself a vertex.
    pub fn run(&self) -> Result<Diffusion<A::Node>, GraphError> {
        let nodes: Vec<&A::Node> = self.adjacency.node_ids().collect();
        let index: FxHashMap<&A::Node, usize> =
            nodes.iter().enumerate().map(|(i, v)| (*v, i)).collect();

        let neighbours = nodes
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let mut resolved = Vec::new();
                for u in self
                    .adjacency
                    .neighbours_of(v)
                    .ok_or_else(|| GraphError::undefined_vertex(*v))?
                {
                    let j = *index
                        .get(u)
                        .ok_or_else(|| GraphError::undefined_vertex(u))?;
                    if j == i {
                        trace!(vertex = ?v, "ignoring self-loop");
                        continue;
                    }
                    resolved.push(j);
                }
                Ok(resolved)
            })
            .collect::<Result<Vec<Vec<usize>>, GraphError>>()?;

        let mut rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let thresholds: Vec<f64> = nodes.iter().map(|_| rng.gen::<f64>()).collect();

        let mut active = vec![false; nodes.len()];
        let mut infected: IndexSet<A::Node> = IndexSet::with_capacity(self.seeds.len());
        for seed in self.seeds.iter() {
            let i = *index
                .get(seed)
                .ok_or_else(|| GraphError::undefined_vertex(seed))?;
            if !active[i] {
                active[i] = true;
                infected.insert(seed.clone());
            }
        }

        let mut round_sizes = vec![infected.len()];
        loop {
            let to_infect: Vec<usize> = (0..nodes.len())
                .filter(|&v| {
                    !active[v] && exceeds_threshold(&neighbours[v], &active, thresholds[v])
                })
                .collect();
            if to_infect.is_empty() {
                break;
            }
            for v in to_infect {
                active[v] = true;
                infected.insert(nodes[v].clone());
            }
            round_sizes.push(infected.len());
            trace!(
                round = round_sizes.len() - 1,
                infected = infected.len(),
                "diffusion round"
            );
        }

        debug!(
            rounds = round_sizes.len() - 1,
            infected = infected.len(),
            num_nodes = nodes.len(),
            "linear threshold diffusion converged"
        );

        let thresholds = nodes.into_iter().cloned().zip(thresholds).collect();
        Ok(Diffusion {
            infected,
            round_sizes,
            thresholds,
        })
    }
}

fn exceeds_threshold(neighbours: &[usize], active: &[bool], threshold: f64) -> bool {
    if neighbours.is_empty() {
        return false;
    }
    let active_neighbours = neighbours.iter().filter(|u| active[**u]).count();
    active_neighbours as f64 / neighbours.len() as f64 > threshold
}

/// Runs [`LinearThreshold`] with the given seeds.
pub fn linear_threshold<A, I>(
    adjacency: &A,
    seeds: I,
    rng_seed: Option<u64>,
) -> Result<Diffusion<A::Node>, GraphError>
where
    A: Adjacency,
    I: IntoIterator<Item = A::Node>,
{
    LinearThreshold::new(adjacency)
        .seeds(seeds)
        .rng_seed(rng_seed)
        .run()
}

/// Outcome of a diffusion run.
#[derive(Clone, Debug, PartialEq)]
pub struct Diffusion<V: NodeId> {
    infected: IndexSet<V>,
    round_sizes: Vec<usize>,
    thresholds: IndexMap<V, f64>,
}

impl<V: NodeId> Diffusion<V> {
    /// Active vertices at the fixed point, in activation order.
    pub fn infected(&self) -> &IndexSet<V> {
        &self.infected
    }

    pub fn into_infected(self) -> IndexSet<V> {
        self.infected
    }

    pub fn is_infected(&self, v: &V) -> bool {
        self.infected.contains(v)
    }

    pub fn num_infected(&self) -> usize {
        self.infected.len()
    }

    /// Size of the active set after each round, starting with the seed set.
    pub fn round_sizes(&self) -> &[usize] {
        &self.round_sizes
    }

    /// Number of rounds that activated at least one vertex.
    pub fn rounds(&self) -> usize {
        self.round_sizes.len() - 1
    }

    pub fn threshold(&self, v: &V) -> Option<f64> {
        self.thresholds.get(v).copied()
    }
}
