use tracing::Level;

use crate::config::LogConfig;

/// Installs the global `fmt` subscriber. Later calls are no-ops.
pub fn init(config: &LogConfig) {
    let level = config.level.parse::<Level>().unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
