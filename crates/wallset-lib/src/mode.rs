// SPDX-License-Identifier: MPL-2.0

use std::{fmt, str::FromStr};

use crate::SetError;

/// How an image is scaled and positioned on the desktop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Center,
    #[default]
    Fill,
    Fit,
    Span,
    Stretch,
    Tile,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Center,
        Mode::Fill,
        Mode::Fit,
        Mode::Span,
        Mode::Stretch,
        Mode::Tile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Center => "center",
            Mode::Fill => "fill",
            Mode::Fit => "fit",
            Mode::Span => "span",
            Mode::Stretch => "stretch",
            Mode::Tile => "tile",
        }
    }

    #[cfg_attr(target_os = "macos", allow(dead_code))]
    pub(crate) fn backend_mode(self) -> wallpaper::Mode {
        match self {
            Mode::Center => wallpaper::Mode::Center,
            Mode::Fill => wallpaper::Mode::Crop,
            Mode::Fit => wallpaper::Mode::Fit,
            Mode::Span => wallpaper::Mode::Span,
            Mode::Stretch => wallpaper::Mode::Stretch,
            Mode::Tile => wallpaper::Mode::Tile,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim().to_ascii_lowercase().as_str() {
            "center" => Mode::Center,
            "fill" | "crop" | "zoom" | "scale" => Mode::Fill,
            "fit" => Mode::Fit,
            "span" => Mode::Span,
            "stretch" => Mode::Stretch,
            "tile" => Mode::Tile,
            _ => return Err(SetError::UnsupportedMode(s.to_owned())),
        };
        Ok(mode)
    }
}

/// Parses `mode`, substituting [`Mode::default`] for unknown names only when
/// `allow_mode_fallback` is set.
pub fn resolve_mode(mode: &str, allow_mode_fallback: bool) -> Result<Mode, SetError> {
    match mode.parse::<Mode>() {
        Ok(mode) => Ok(mode),
        Err(err) if allow_mode_fallback => {
            tracing::warn!(
                "{err}, falling back to {} mode",
                Mode::default().as_str()
            );
            Ok(Mode::default())
        }
        Err(err) => Err(err),
    }
}
