use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `LAV_LOG=debug` or `LAV_LOG=lav_install=trace`.
pub const LOG_ENV: &str = "LAV_LOG";

/// Logs go to stderr so stdout stays reserved for command output.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
