//! Tracing setup for the command-line tool.
//!
//! Diagnostics go to stderr so stdout carries only command output.

use tracing_subscriber::EnvFilter;

/// The filter used when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        log_level.to_string()
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(log_level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(default_directive("warn", false), "warn");
        assert_eq!(default_directive("warn", true), "debug");
    }
}
