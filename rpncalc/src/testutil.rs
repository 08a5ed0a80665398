use tracing_subscriber::EnvFilter;

// Log output is controlled through RUST_LOG, eg: RUST_LOG=rpncalc=trace
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
