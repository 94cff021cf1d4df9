use crate::config::{analysis_config::AnalysisConfig, log_config::LoggingConfig};
use config::{Config, ConfigError, File, FileFormat};
use netscope::algorithms::centrality::{EigenvectorParams, KatzParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, PartialEq, Clone, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    analysis: AnalysisConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            analysis: config.analysis,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfig::default().into()
    }

    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.analysis.top_k = top_k;
        self
    }

    pub fn with_eigenvector(mut self, eigenvector: EigenvectorParams) -> Self {
        self.analysis.eigenvector = eigenvector;
        self
    }

    pub fn with_katz(mut self, katz: KatzParams) -> Self {
        self.analysis.katz = katz;
        self
    }

    pub fn with_katz_alpha(mut self, alpha: f64) -> Self {
        self.analysis.katz.alpha = alpha;
        self
    }

    /// Sets the stopping tolerance of both iterative centralities.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.analysis.eigenvector.confidence = confidence;
        self.analysis.katz.confidence = confidence;
        self
    }

    /// Sets the iteration budget of both iterative centralities.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.analysis.eigenvector.max_iterations = max_iterations;
        self.analysis.katz.max_iterations = max_iterations;
        self
    }

    pub fn with_diffusion_seed(mut self, diffusion_seed: Option<u64>) -> Self {
        self.analysis.diffusion_seed = diffusion_seed;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            analysis: self.analysis,
        }
    }
}

/// Layers a config file over `app_config` (or the defaults).
///
/// The file format follows its extension. Command line overrides are applied on top of the
/// result by the caller, giving args > file > defaults.
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let app_config = app_config.unwrap_or_default();
    let json =
        serde_json::to_string(&app_config).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    builder.build()?.try_deserialize::<AppConfig>()
}
