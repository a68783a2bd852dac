// SPDX-License-Identifier: MPL-2.0

//! Sets the desktop background on behalf of callers in another runtime.
//!
//! The exported C functions live in [`ffi`]; [`bridge`] holds the same
//! operation for Rust callers and for tests with a custom setter.

pub mod bridge;
pub mod diagnostic;
pub mod ffi;
pub mod logging;

pub use bridge::{
    ALLOW_MODE_FALLBACK, Outcome, set_background, set_background_with, try_set_background,
};
pub use wallset_lib::{Mode, ScriptSetter, SetError, SystemSetter, WallpaperSetter};
