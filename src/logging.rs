/// Installs the `tracing` subscriber for the binary.
///
/// Verbosity comes from `RUST_LOG` (`info` when unset). Log lines go to stderr so that
/// stdout carries only the order CSV.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
