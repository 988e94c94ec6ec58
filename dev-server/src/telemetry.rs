use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Compose the tracing subscriber. `RUST_LOG` overrides the default
/// filter when set.
pub fn get_subscriber(
    default_filter: String,
) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default().with(env_filter).with(fmt::layer())
}

/// Register a subscriber as the global default, bridging `log` events
/// into tracing.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    tracing_log::LogTracer::init().expect("failed to set logger");
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to set subscriber");
}
