use tracing_subscriber::{
    Layer, Registry,
    fmt::{self},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LoggerConfig, LoggerFormat};

/// Installs the global `tracing` subscriber. Fails if one is already set.
pub fn init_logger(opts: LoggerConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let stdio_filter = tracing_subscriber::EnvFilter::new(opts.level);
    let stdio_layer = match opts.format {
        LoggerFormat::Pretty => fmt::Layer::default().pretty().boxed(),
        LoggerFormat::Json => fmt::Layer::default().json().boxed(),
        LoggerFormat::Compact => fmt::Layer::default().compact().boxed(),
    }
    .with_filter(stdio_filter);

    Registry::default().with(stdio_layer).try_init()
}
