//! Diagnostic logging setup.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

/// Returns the filter directive for a verbosity count.
fn directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "symdex=debug,symdex_index=debug,symdex_query=debug,symdex_config=debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(directive(0), "warn");
        assert!(directive(1).contains("symdex_query=debug"));
        assert_eq!(directive(5), "trace");
    }
}
