use tracing_subscriber::EnvFilter;

/// Default filter for the app and its tools when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,desktop_starter=info";

/// `RUST_LOG` when set and valid, otherwise `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the fmt subscriber. A second call is a no-op.
pub fn init(default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_the_first_subscriber() {
        init(DEFAULT_FILTER);
        init("warn");
        tracing::info!("still logging");
    }
}
