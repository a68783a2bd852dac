// SPDX-License-Identifier: MPL-2.0

//! Wallpaper setters behind a single "set with explicit mode" operation.

pub mod error;
pub mod mode;
pub mod script;
pub mod setter;

pub use error::SetError;
pub use mode::{Mode, resolve_mode};
pub use script::ScriptSetter;
pub use setter::{SystemSetter, WallpaperSetter};
