//! Tracing setup for the vidflow binary.
//!
//! Logs go to stderr so that `--json` output on stdout stays parseable.

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Check if colored output should be used.
///
/// Returns true only if:
/// - stderr is a terminal (TTY)
/// - NO_COLOR environment variable is not set
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Default filter directive when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "vidflow=debug,info"
    } else {
        "vidflow=info,warn"
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the `verbose` flag. Verbose mode also prints targets.
/// Fails if a subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color())
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "vidflow=debug,info");
        assert_eq!(default_directive(false), "vidflow=info,warn");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_second_init_fails() {
        // whichever call runs first in this process wins; the other must error
        let first = init_tracing(false);
        let second = init_tracing(true);
        assert!(first.is_err() || second.is_err());
    }
}
