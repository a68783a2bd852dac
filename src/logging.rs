// SPDX-License-Identifier: MPL-2.0

//! Opt-in structured logging for hosts that want to see what the bridge does.

use tracing_subscriber::prelude::*;

const TARGETS: [&str; 2] = ["dynpaper_bridge", "wallset_lib"];

/// Reads the maximum level from `RUST_LOG`, defaulting to `INFO`.
pub fn log_level() -> tracing::Level {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO)
}

/// Installs a stderr subscriber. Calling it again once a global subscriber
/// exists does nothing.
pub fn init_logger() {
    let log_level = log_level();

    let log_format = tracing_subscriber::fmt::format()
        .without_time()
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_thread_names(true);

    let log_filter = tracing_subscriber::fmt::Layer::default()
        .with_writer(std::io::stderr)
        .event_format(log_format)
        .with_filter(tracing_subscriber::filter::filter_fn(move |metadata| {
            metadata.level() == &tracing::Level::ERROR
                || (is_own_target(metadata.target()) && metadata.level() <= &log_level)
        }));

    if let Err(err) = tracing_subscriber::registry().with(log_filter).try_init() {
        tracing::debug!("logger already installed: {err}");
    }
}

fn is_own_target(target: &str) -> bool {
    TARGETS.iter().any(|own| target.starts_with(own))
}
