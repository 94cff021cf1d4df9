//! Structural summaries of a graph: diameter and largest component, clustering coefficients and
//! small-pattern counts.

pub mod census;
pub mod clustering_coefficient;
pub mod diameter;
