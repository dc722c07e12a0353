//! Logger initialization.

use std::sync::Once;

/// Filter used when neither [`LoggingConfig::env_filter`] nor `RUST_LOG` is
/// set. winit and glutin log every event-loop wakeup at `info`/`debug`, so
/// they are held to `warn`.
pub const DEFAULT_FILTER: &str = "info,winit=warn,glutin=warn,glutin_winit=warn";

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. `"hello_glow=debug"`).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter, overriding `RUST_LOG`.
    pub env_filter: Option<String>,
    /// ANSI coloring behavior.
    pub write_style: env_logger::WriteStyle,
    /// Prefix each line with a millisecond timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// The filter string to install: the explicit filter, then `rust_log`,
    /// then [`DEFAULT_FILTER`]. Blank values are skipped.
    #[must_use]
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        [self.env_filter.as_deref(), rust_log]
            .into_iter()
            .flatten()
            .find(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_owned()
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // Another logger may already be installed by an embedding binary.
        if builder.try_init().is_err() {
            log::warn!("a global logger was already installed");
        }

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("hello_glow=trace".to_owned()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(Some("error")), "hello_glow=trace");
    }

    #[test]
    fn rust_log_beats_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("debug")), "debug");
    }

    #[test]
    fn falls_back_to_quiet_windowing_default() {
        let config = LoggingConfig {
            env_filter: Some("  ".to_owned()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(None), DEFAULT_FILTER);
        assert_eq!(config.resolve_filter(Some("")), DEFAULT_FILTER);
        assert!(DEFAULT_FILTER.contains("winit=warn"));
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("debug".to_owned()),
            write_style: env_logger::WriteStyle::Never,
            timestamps: false,
        });
        init_logging(LoggingConfig::default());
        assert!(INIT.is_completed());
    }
}
