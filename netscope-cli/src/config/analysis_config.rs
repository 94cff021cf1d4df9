use netscope::algorithms::centrality::{EigenvectorParams, KatzParams};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 10;

/// Tuning knobs shared by the analysis commands.
#[derive(Debug, Deserialize, PartialEq, Clone, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many vertices `top` prints and `diffuse` seeds with.
    pub top_k: usize,
    pub eigenvector: EigenvectorParams,
    pub katz: KatzParams,
    /// Seed for diffusion thresholds. Unset means a fresh draw on every run.
    pub diffusion_seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            eigenvector: EigenvectorParams::default(),
            katz: KatzParams::default(),
            diffusion_seed: None,
        }
    }
}
