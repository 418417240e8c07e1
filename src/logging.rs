//! Diagnostic logging.
//!
//! Log lines go to stderr through a `tracing` fmt subscriber so stdout stays
//! clean for command output. `RUST_LOG` always wins over the configured level.
//!
//! The subscriber is installed before the config file is read, so config
//! loading can log too. Once the config is known, [`LogHandle::set_level`]
//! swaps in its level.

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::error::{Result, SwatchError};

/// Level used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Level used by `--verbose`.
pub const VERBOSE_LEVEL: &str = "debug";

/// Pick the filter directive: `--verbose`, then the config value, then
/// [`DEFAULT_LEVEL`].
pub fn resolve_level(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        configured.unwrap_or(DEFAULT_LEVEL)
    }
}

/// Build the filter, preferring `RUST_LOG` when it is set and valid.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level).map_err(|e| SwatchError::Parse {
        message: format!("Invalid log level {:?}: {}", level, e),
        help: Some("Use one of: error, warn, info, debug, trace".to_string()),
    })
}

/// Handle to the installed subscriber's filter.
pub struct LogHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl LogHandle {
    /// Replace the active filter. `RUST_LOG` still takes precedence.
    ///
    /// Does nothing when another subscriber was already installed.
    pub fn set_level(&self, level: &str) -> Result<()> {
        let Some(handle) = &self.reload else {
            return Ok(());
        };

        let filter = build_filter(level)?;
        handle.reload(filter).map_err(|e| SwatchError::Parse {
            message: format!("Failed to apply log level {:?}: {}", level, e),
            help: None,
        })?;
        tracing::debug!(level, "log level updated");
        Ok(())
    }
}

/// Registry with a reloadable filter and a fmt layer writing to `writer`.
pub(crate) fn layered<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<EnvFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );
    (subscriber, handle)
}

/// Install the global subscriber. Calling it twice is a no-op, and the
/// second handle does nothing.
pub fn init_logging(level: &str) -> Result<LogHandle> {
    let filter = build_filter(level)?;
    let (subscriber, handle) = layered(filter, std::io::stderr, std::io::stderr().is_terminal());

    if subscriber.try_init().is_ok() {
        tracing::debug!(level, "logging initialized");
        Ok(LogHandle {
            reload: Some(handle),
        })
    } else {
        Ok(LogHandle { reload: None })
    }
}


#[cfg(test)]
mod tests {
    use super::capture::Captured;
    use super::*;

    #[test]
    fn test_verbose_overrides_config() {
        assert_eq!(resolve_level(true, Some("error")), "debug");
    }

    #[test]
    fn test_config_overrides_default() {
        assert_eq!(resolve_level(false, Some("info")), "info");
        assert_eq!(resolve_level(false, None), DEFAULT_LEVEL);
    }

    #[test]
    fn test_invalid_level_is_a_parse_error() {
        // Only meaningful when RUST_LOG does not short-circuit the check.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("swatch=loud").unwrap_err();
        assert!(matches!(err, SwatchError::Parse { .. }));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("warn").unwrap();
        let second = init_logging("warn").unwrap();
        second.set_level("debug").unwrap();
    }

    #[test]
    fn test_reload_raises_level() {
        let sink = Captured::default();
        let (subscriber, handle) = layered(EnvFilter::new("warn"), sink.make_writer(), false);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("before reload");
            handle.reload(EnvFilter::new("debug")).unwrap();
            tracing::debug!("after reload");
        });

        let logs = sink.contents();
        assert!(!logs.contains("before reload"), "{logs}");
        assert!(logs.contains("after reload"), "{logs}");
    }
}
