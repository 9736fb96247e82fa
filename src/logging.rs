//! Logging setup for the `wsa-shell` binary
//!
//! Diagnostics go through `tracing` and are written to stderr, so command
//! output on stdout stays clean. `RUST_LOG` adds directives on top of the
//! configured level.

use std::io;
use std::sync::Once;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's own events
    pub level: Level,

    /// Emit one JSON object per event
    pub use_json: bool,

    /// Include the module target in each event
    pub include_target: bool,
}

impl Default for LoggingConfig {
    /// Warnings only, plain text.
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parses a log level, case-insensitively. Unknown names fall back to WARN.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(config.level).into())
            .from_env_lossy();
        if let Ok(directive) = format!("wsa_shell={}", config.level).parse() {
            filter = filter.add_directive(directive);
        }

        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(config.include_target);

        // Another global subscriber may already be installed.
        let _ = if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .try_init()
        } else {
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        };
    });
}
