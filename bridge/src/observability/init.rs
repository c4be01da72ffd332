use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over `level` when set. Only the first call in a process takes effect.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use crate::observability::init_tracing;

    #[test]
    fn init_tracing_twice() {
        init_tracing("debug");
        init_tracing("info");
        tracing::debug!("tracing initialized");
    }
}
