// SPDX-License-Identifier: MPL-2.0

//! Setting the background through a user supplied program.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use crate::{SetError, WallpaperSetter, resolve_mode};

/// Runs `<script> -m <mode> <image>` to change the background.
///
/// The program is executed directly, never through a shell, so the path is
/// passed as a single argument whatever characters it contains.
#[derive(Debug, Clone)]
pub struct ScriptSetter {
    script: PathBuf,
}

impl ScriptSetter {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl WallpaperSetter for ScriptSetter {
    fn set_wallpaper_custom(
        &self,
        path: &str,
        mode: &str,
        allow_mode_fallback: bool,
    ) -> Result<(), SetError> {
        let mode = resolve_mode(mode, allow_mode_fallback)?;
        let command = format!("{} -m {} {}", self.script.display(), mode, path);

        tracing::debug!("running {command}");

        let status = Command::new(&self.script)
            .arg("-m")
            .arg(mode.as_str())
            .arg(path)
            .status()
            .map_err(|source| SetError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SetError::CommandFailed { command, status });
        }

        Ok(())
    }
}
