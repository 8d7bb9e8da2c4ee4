//! tally CLI entry point

fn main() {
    // Initialize structured logging with env-based filter, defaulting to warn so logs stay out of the report
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    tally::cli::run();
}
