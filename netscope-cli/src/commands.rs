//! The analyses behind each subcommand, writing plain-text reports to any [`Write`].

use crate::config::analysis_config::AnalysisConfig;
use clap::ValueEnum;
use config::ConfigError;
use itertools::Itertools;
use netscope::{
    algorithms::{
        centrality::{top_centers, Centrality},
        diffusion::linear_threshold::linear_threshold,
        metrics::{
            census::graph_census,
            clustering_coefficient::{average_clustering, average_clustering_undirected},
            diameter::component_summary,
        },
    },
    prelude::*,
};
use std::io::{self, Write};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    GraphError(#[from] GraphError),
    #[error("Failed to write report: {0}")]
    OutputError(#[from] io::Error),
}

/// Which centrality to rank by, as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CentralityKind {
    #[value(alias = "b")]
    Betweenness,
    #[value(alias = "e")]
    Eigenvector,
    #[value(alias = "k")]
    Katz,
    KatzSpread,
}

impl CentralityKind {
    /// The centrality with its parameters taken from `analysis`.
    pub fn with_params(self, analysis: &AnalysisConfig) -> Centrality {
        match self {
            CentralityKind::Betweenness => Centrality::Betweenness,
            CentralityKind::Eigenvector => Centrality::Eigenvector(analysis.eigenvector),
            CentralityKind::Katz => Centrality::Katz(analysis.katz),
            CentralityKind::KatzSpread => Centrality::KatzSpread(analysis.katz),
        }
    }
}

pub fn summary<V: NodeId, W: Write>(graph: &DiGraph<V>, out: &mut W) -> Result<(), CliError> {
    let components = component_summary(graph);
    let census = graph_census(graph);

    writeln!(out, "vertices: {}", graph.count_nodes())?;
    writeln!(out, "directed edges: {}", graph.count_edges())?;
    writeln!(out, "undirected edges: {}", graph.count_undirected_edges())?;
    writeln!(
        out,
        "largest component: {} vertices, ~{} edges",
        components.largest_component_nodes, components.largest_component_edges
    )?;
    writeln!(out, "diameter: {}", components.diameter)?;
    writeln!(out, "clustering (directed): {:.6}", average_clustering(graph))?;
    writeln!(
        out,
        "clustering (undirected): {:.6}",
        average_clustering_undirected(graph)
    )?;
    writeln!(
        out,
        "census: {} edges, {} triangles, {} two-paths",
        census.edges, census.triangles, census.two_paths
    )?;
    Ok(())
}

pub fn top<V: NodeId + std::fmt::Display, W: Write>(
    graph: &DiGraph<V>,
    k: usize,
    centrality: Centrality,
    out: &mut W,
) -> Result<(), CliError> {
    let top = top_centers(graph, k, centrality)?;
    info!(%centrality, k, returned = top.len(), "ranked vertices");
    for (rank, (v, score)) in top.iter().enumerate() {
        writeln!(out, "{}\t{v}\t{score:.6}", rank + 1)?;
    }
    Ok(())
}

/// Seeds a linear threshold diffusion with the `seed_top` most central vertices.
pub fn diffuse<V: NodeId + std::fmt::Display, W: Write>(
    graph: &DiGraph<V>,
    seed_top: usize,
    centrality: Centrality,
    rng_seed: Option<u64>,
    out: &mut W,
) -> Result<(), CliError> {
    let seeds = top_centers(graph, seed_top, centrality)?.vertices;
    writeln!(out, "seeds ({centrality}): {}", seeds.iter().join(" "))?;

    let diffusion = linear_threshold(graph, seeds, rng_seed)?;
    writeln!(out, "round sizes: {}", diffusion.round_sizes().iter().join(" "))?;
    writeln!(
        out,
        "infected: {} of {}",
        diffusion.num_infected(),
        graph.count_nodes()
    )?;
    Ok(())
}
