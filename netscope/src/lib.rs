//! # netscope
//!
//! netscope analyses directed graphs that model social and information networks.
//!
//! It provides:
//!
//! * An immutable directed graph store keyed by opaque vertex identifiers ([`db::graph::DiGraph`]).
//! * BFS based structural metrics: diameter, largest component and clustering coefficients.
//! * Betweenness, eigenvector and Katz centrality together with a top-k selector.
//! * A linear-threshold diffusion simulator.
//! * An edge-list loader and a handful of synthetic graph generators.
//!
//! # Example
//!
//! ```rust
//! use netscope::prelude::*;
//! use netscope::algorithms::centrality::{top_centers, Centrality};
//!
//! let mut builder = GraphBuilder::new();
//! for (src, dst) in [("a", "b"), ("b", "c"), ("c", "d")] {
//!     builder.add_edge(src, dst);
//! }
//! let graph = builder.build();
//!
//! let top = top_centers(&graph, 2, Centrality::Betweenness).unwrap();
//! assert_eq!(top.vertices.len(), 2);
//! ```

pub mod algorithms;
pub mod db;
pub mod errors;
pub mod graph_loader;
pub mod graphgen;

pub mod prelude {
    pub use crate::{
        algorithms::algorithm_result::{AlgorithmResult, Convergence},
        db::{
            adjacency::Adjacency,
            graph::{DiGraph, GraphBuilder},
        },
        errors::GraphError,
    };
    pub use netscope_api::core::entities::{NodeId, VID};
}

#[cfg(test)]
pub(crate) mod test_utils;
