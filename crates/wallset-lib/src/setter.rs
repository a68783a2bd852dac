// SPDX-License-Identifier: MPL-2.0

use crate::{SetError, resolve_mode};

/// Something that can change the desktop background.
///
/// Implementations must not keep the path, mode or outcome of a call around;
/// every call stands on its own and may run concurrently with others.
pub trait WallpaperSetter: Send + Sync {
    /// Sets `path` as the background using the placement `mode`.
    ///
    /// With `allow_mode_fallback` unset, an unrecognized `mode` is an error
    /// rather than silently replaced by the default mode.
    fn set_wallpaper_custom(
        &self,
        path: &str,
        mode: &str,
        allow_mode_fallback: bool,
    ) -> Result<(), SetError>;
}

impl<T: WallpaperSetter + ?Sized> WallpaperSetter for &T {
    fn set_wallpaper_custom(
        &self,
        path: &str,
        mode: &str,
        allow_mode_fallback: bool,
    ) -> Result<(), SetError> {
        (**self).set_wallpaper_custom(path, mode, allow_mode_fallback)
    }
}

/// Sets the background through the running desktop environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSetter;

impl WallpaperSetter for SystemSetter {
    fn set_wallpaper_custom(
        &self,
        path: &str,
        mode: &str,
        allow_mode_fallback: bool,
    ) -> Result<(), SetError> {
        let mode = resolve_mode(mode, allow_mode_fallback)?;
        if path.is_empty() {
            return Err(SetError::EmptyPath);
        }

        tracing::debug!("setting {path} as the background with mode {mode}");

        wallpaper::set_from_path(path).map_err(|err| SetError::Backend(err.to_string()))?;
        apply_mode(mode)
    }
}

#[cfg(not(target_os = "macos"))]
fn apply_mode(mode: crate::Mode) -> Result<(), SetError> {
    wallpaper::set_mode(mode.backend_mode()).map_err(|err| SetError::Backend(err.to_string()))
}

// The macOS backend has no placement modes; the system keeps its own.
#[cfg(target_os = "macos")]
fn apply_mode(mode: crate::Mode) -> Result<(), SetError> {
    tracing::debug!("ignoring {mode} mode on macOS");
    Ok(())
}
