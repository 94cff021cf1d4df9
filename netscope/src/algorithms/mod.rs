//! Implementations of the graph algorithms that can be run on a [`DiGraph`](crate::db::graph::DiGraph).
//!
//! The algorithms are grouped into modules by what they compute. To run an algorithm import
//! the function and pass it a graph.
//!
//! # Examples
//!
//! ```rust
//! use netscope::algorithms::metrics::diameter::component_summary;
//! use netscope::prelude::*;
//!
//! let mut builder = GraphBuilder::new();
//! for (src, dst) in [(1u64, 2u64), (2, 1), (2, 3), (3, 2)] {
//!     builder.add_edge(src, dst);
//! }
//! let g = builder.build();
//!
//! let summary = component_summary(&g);
//! assert_eq!(summary.diameter, 2);
//! ```

pub mod algorithm_result;
pub mod centrality;
pub mod diffusion;
pub mod metrics;
