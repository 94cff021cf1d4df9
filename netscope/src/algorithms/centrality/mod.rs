//! Vertex rankings: betweenness, eigenvector and Katz centrality, and top-k selection.
//!
//! # Examples
//!
//! ```rust
//! use netscope::algorithms::centrality::{top_centers, Centrality, KatzParams};
//! use netscope::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! for (src, dst) in [(1u64, 2u64), (2, 3), (3, 1), (3, 4)] {
//!     builder.add_edge(src, dst);
//! }
//! let g = builder.build();
//!
//! let (vertices, scores) = top_centers(&g, 2, Centrality::Katz(KatzParams::default()))
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(vertices.len(), 2);
//! assert!(scores[0] >= scores[1]);
//! ```

pub mod betweenness;
pub mod eigenvector;
pub mod katz;
pub(crate) mod power_iteration;

use crate::{
    algorithms::algorithm_result::{AlgorithmResult, TopK},
    db::graph::DiGraph,
    errors::GraphError,
};
use netscope_api::core::entities::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const DEFAULT_EIGENVECTOR_CONFIDENCE: f64 = 0.01;
pub const DEFAULT_KATZ_ALPHA: f64 = 0.125;
pub const DEFAULT_KATZ_CONFIDENCE: f64 = 1.0e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorParams {
    /// Stop once the summed absolute change between iterations is below this value.
    pub confidence: f64,
    /// Upper bound on the number of iterations.
    pub max_iterations: usize,
}

impl Default for EigenvectorParams {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_EIGENVECTOR_CONFIDENCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl EigenvectorParams {
    pub fn validate(&self) -> Result<(), GraphError> {
        validate_confidence(self.confidence)?;
        validate_max_iterations(self.max_iterations)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatzParams {
    /// Attenuation applied per hop.
    pub alpha: f64,
    /// Stop once the summed absolute change between iterations is below this value.
    pub confidence: f64,
    /// Upper bound on the number of iterations.
    pub max_iterations: usize,
}

impl Default for KatzParams {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_KATZ_ALPHA,
            confidence: DEFAULT_KATZ_CONFIDENCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KatzParams {
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(GraphError::InvalidParameter {
                name: "alpha",
                reason: format!("expected a positive finite number, got {}", self.alpha),
            });
        }
        validate_confidence(self.confidence)?;
        validate_max_iterations(self.max_iterations)
    }
}

fn validate_confidence(confidence: f64) -> Result<(), GraphError> {
    if confidence.is_nan() || confidence <= 0.0 {
        return Err(GraphError::InvalidParameter {
            name: "confidence",
            reason: format!("expected a positive number, got {confidence}"),
        });
    }
    Ok(())
}

fn validate_max_iterations(max_iterations: usize) -> Result<(), GraphError> {
    if max_iterations == 0 {
        return Err(GraphError::InvalidParameter {
            name: "max_iterations",
            reason: "at least one iteration is required".to_string(),
        });
    }
    Ok(())
}

/// The centrality measure to rank vertices by, together with its tuning parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Centrality {
    Betweenness,
    Eigenvector(EigenvectorParams),
    /// Katz centrality pulled from out-neighbours.
    Katz(KatzParams),
    /// Katz centrality pushed onto out-neighbours.
    KatzSpread(KatzParams),
}

impl Centrality {
    /// Single character tag, `b`, `e`, `k` or `K` for the spread variant.
    pub fn tag(&self) -> char {
        match self {
            Centrality::Betweenness => 'b',
            Centrality::Eigenvector(_) => 'e',
            Centrality::Katz(_) => 'k',
            Centrality::KatzSpread(_) => 'K',
        }
    }

    pub fn run<V: NodeId>(&self, g: &DiGraph<V>) -> Result<AlgorithmResult<V>, GraphError> {
        match self {
            Centrality::Betweenness => Ok(betweenness::betweenness_centrality(g)),
            Centrality::Eigenvector(params) => eigenvector::eigenvector_centrality(g, *params),
            Centrality::Katz(params) => katz::katz_centrality(g, *params),
            Centrality::KatzSpread(params) => katz::katz_spread_centrality(g, *params),
        }
    }
}

impl Display for Centrality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Centrality::Betweenness => "betweenness",
            Centrality::Eigenvector(_) => "eigenvector",
            Centrality::Katz(_) => "katz",
            Centrality::KatzSpread(_) => "katz-spread",
        };
        write!(f, "{name}")
    }
}

/// The `k` vertices with the highest centrality, best first.
///
/// # Errors
///
/// * [`GraphError::InvalidParameter`] if the centrality parameters are out of range.
/// * [`GraphError::NonConvergence`] if an iterative centrality ran out of iterations, since a
///   ranking of an unconverged iterate is not meaningful.
pub fn top_centers<V: NodeId>(
    g: &DiGraph<V>,
    k: usize,
    centrality: Centrality,
) -> Result<TopK<V>, GraphError> {
    let result = centrality.run(g)?.into_converged()?;
    Ok(result.top_k(k))
}
