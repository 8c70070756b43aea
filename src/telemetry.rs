use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tracing goes to stderr so the alternate-screen TUI stays intact.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tagview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
