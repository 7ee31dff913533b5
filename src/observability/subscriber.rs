use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `boilerplate=debug`.
pub const LOG_ENV_VAR: &str = "BOILERPLATE_LOG";

/// Level directive for a `-v` count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber, writing to stderr so generated code
/// printed on stdout stays clean.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(verbosity, "tracing initialized");
    }
}
