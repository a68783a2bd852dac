// SPDX-License-Identifier: MPL-2.0

use std::process::ExitStatus;

/// Reasons a wallpaper change can fail.
///
/// The `Display` output is the human-readable description handed back to
/// callers of the bridge.
#[derive(Debug, thiserror::Error)]
pub enum SetError {
    #[error("unsupported background mode {0:?}")]
    UnsupportedMode(String),
    #[error("no image path given")]
    EmptyPath,
    #[error("{0}")]
    Backend(String),
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("command {command} did not run successfully ({status})")]
    CommandFailed { command: String, status: ExitStatus },
}
