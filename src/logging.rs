// Logging setup - tracing subscriber wiring for embedding shells
//
// The crate itself only emits tracing events (component creation, disposal,
// state flushes); where they go is the shell's decision. This helper covers
// the common case of logging to stderr with an env-driven filter.
//
// Precedence: RUST_LOG env var > the shell's default filter.

use tracing_subscriber::EnvFilter;

/// Initialize tracing output for an embedding shell.
///
/// `default_filter` is used when `RUST_LOG` is unset, e.g.
/// `"panekit=debug,info"`. Later calls are ignored, so tests and shells
/// that already installed a subscriber are unaffected.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_twice() {
        init("panekit=debug");
        init("panekit=trace");
    }
}
