// SPDX-License-Identifier: MPL-2.0

//! Forwarding a background change to a [`WallpaperSetter`] and absorbing
//! whatever goes wrong.

use std::{
    any::Any,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
};

use wallset_lib::{SystemSetter, WallpaperSetter};

use crate::diagnostic;

/// Unknown modes are reported as failures instead of being replaced.
pub const ALLOW_MODE_FALLBACK: bool = false;

/// Result of a single background change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure { reason: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Success => None,
            Outcome::Failure { reason } => Some(reason),
        }
    }
}

/// Asks `setter` to change the background and reports the outcome without
/// writing anything. Panics inside the setter become failures.
pub fn try_set_background<S>(setter: &S, path: &str, mode: &str) -> Outcome
where
    S: WallpaperSetter + ?Sized,
{
    tracing::debug!("forwarding background change to {path} with mode {mode}");

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        setter.set_wallpaper_custom(path, mode, ALLOW_MODE_FALLBACK)
    }));

    match result {
        Ok(Ok(())) => Outcome::Success,
        Ok(Err(err)) => Outcome::Failure {
            reason: err.to_string(),
        },
        Err(payload) => Outcome::Failure {
            reason: format!("collaborator panicked: {}", panic_message(payload.as_ref())),
        },
    }
}

/// Like [`try_set_background`], but a failure is also written to `sink` as a
/// single diagnostic line.
pub fn set_background_with<S, W>(setter: &S, path: &str, mode: &str, sink: &mut W) -> Outcome
where
    S: WallpaperSetter + ?Sized,
    W: Write + ?Sized,
{
    let outcome = try_set_background(setter, path, mode);

    if let Outcome::Failure { reason } = &outcome {
        tracing::debug!("background change failed: {reason}");
        if let Err(err) = diagnostic::write_line(sink, path, mode, reason) {
            tracing::debug!("unable to write diagnostic: {err}");
        }
    }

    outcome
}

/// Changes the background through the desktop environment, reporting any
/// failure on stderr. Nothing is returned either way.
pub fn set_background(path: &str, mode: &str) {
    set_background_with(&SystemSetter, path, mode, &mut io::stderr());
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
