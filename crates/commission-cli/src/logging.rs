//! Tracing subscriber setup

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// reports; `RUST_LOG` overrides the configured filter.
///
/// # Errors
/// Invalid filter directive (from `RUST_LOG` or the config) or a subscriber
/// already installed
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), &config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };
    installed.context("Failed to install tracing subscriber")
}

/// A non-blank `env` directive wins over `configured`; a malformed one is an
/// error rather than a silent fallback.
fn build_filter(env: Option<&str>, configured: &str) -> anyhow::Result<EnvFilter> {
    match env.filter(|directive| !directive.trim().is_empty()) {
        Some(directive) => EnvFilter::try_new(directive).with_context(|| {
            format!("Invalid {} filter '{directive}'", EnvFilter::DEFAULT_ENV)
        }),
        None => EnvFilter::try_new(configured)
            .with_context(|| format!("Invalid log filter '{configured}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_directive_overrides_config() {
        let filter = build_filter(Some("commission_forms=debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "commission_forms=debug");
    }

    #[test]
    fn blank_env_falls_back_to_config() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
        assert_eq!(build_filter(None, "warn").unwrap().to_string(), "warn");
    }

    #[test]
    fn malformed_env_directive_is_reported() {
        let err = build_filter(Some("commission_forms=loud"), "info").unwrap_err();
        assert!(err.to_string().contains("Invalid RUST_LOG filter"));
        assert!(build_filter(None, "info=[").is_err());
    }
}
