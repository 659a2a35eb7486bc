use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber used by both binaries.
///
/// Defaults to `info`; override with `RUST_LOG`, e.g. `RUST_LOG=netplay=debug`.
/// Stdout is left alone so resolver and client output stay clean.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
