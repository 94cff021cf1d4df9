//! Provides functionality for generating synthetic graphs for testing and experiments.
//!
//! Every generator takes an optional seed. The same seed always produces the same graph, and
//! `None` seeds the generator from system entropy.

use crate::errors::GraphError;
use rand::{rngs::StdRng, SeedableRng};

pub mod preferential_attachment;
pub mod random_graph;
pub mod watts_strogatz;

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub(crate) fn validate_probability(name: &'static str, p: f64) -> Result<(), GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidParameter {
            name,
            reason: format!("expected a probability in [0, 1], got {p}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_edge_bounds(e_inf: usize, e_sup: usize) -> Result<(), GraphError> {
    if e_inf > e_sup {
        return Err(GraphError::InvalidParameter {
            name: "e_inf",
            reason: format!("lower edge bound {e_inf} exceeds upper bound {e_sup}"),
        });
    }
    Ok(())
}
