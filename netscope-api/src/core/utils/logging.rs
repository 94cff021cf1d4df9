use std::io;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Builds the filter used by the global subscriber.
///
/// `RUST_LOG` wins when it is set and parses, otherwise `log_level` is used as the default
/// directive.
pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

pub fn init_global_logger(log_level: String) {
    init_global_logger_with_writer(log_level, io::stdout)
}

/// Like [`init_global_logger`], but formatted events go to `writer`.
pub fn init_global_logger_with_writer<W>(log_level: String, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    // a subscriber may already be installed, e.g. by another test in the same binary
    let _ = tracing_subscriber::registry()
        .with(get_log_env(log_level))
        .with(fmt::layer().with_target(true).with_writer(writer))
        .try_init();
}

pub fn global_info_logger() {
    init_global_logger(DEFAULT_LOG_LEVEL.to_string())
}

pub fn global_debug_logger() {
    init_global_logger("DEBUG".to_string())
}

pub fn global_trace_logger() {
    init_global_logger("TRACE".to_string())
}
