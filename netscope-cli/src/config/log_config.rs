pub use netscope_api::core::utils::logging::DEFAULT_LOG_LEVEL;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, serde::Serialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
