use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `CHAT_LOG` wins over `RUST_LOG`.
pub fn init_tracing() {
    let filter = std::env::var("CHAT_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info,mistral_chat=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}
