//! Logging setup, built on `tracing-subscriber`.
//! Everything goes to stderr so stdout only carries results.

use std::io;

use tracing_subscriber::{
    Layer, Registry, filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LogConfig;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Multi-line, colored
    Pretty,
    /// One line per event
    Compact,
    /// For tool integration
    Json,
}

/// Installs the global subscriber.
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target("gerber::rules", log_config.level_for("gerber::rules"))
        .with_target("gerber::dfa", log_config.level_for("gerber::dfa"))
        .with_target("gerber::nfa", log_config.level_for("gerber::nfa"));

    tracing_subscriber::registry()
        .with(create_format_layer(format).with_filter(targets))
        .init();
}

/// Create formatter layer based on format
fn create_format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}
