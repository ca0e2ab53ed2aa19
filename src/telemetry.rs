use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Composes layers into a full `tracing` subscriber that writes bunyan-style JSON.
///
/// `name` will be attached to all logged messages.
///
/// `default_level` is used when `RUST_LOG` is not set. Should be one of "info",
/// "warn", "debug", "error", or "trace".
///
/// `sink` is where all logs will be written. Tests pass `std::io::sink` to swallow them.
pub fn get_subscriber<Sink>(
    name: String,
    default_level: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let format_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(format_layer)
}

/// Registers `subscriber` as the global default and routes `log` records from
/// dependencies (actix, reqwest) into it.
///
/// Panics if called more than once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
