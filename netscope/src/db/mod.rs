pub mod adjacency;
pub mod graph;
