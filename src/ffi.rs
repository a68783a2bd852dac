// SPDX-License-Identifier: MPL-2.0

//! C ABI entry points.
//!
//! Text arguments are NUL-terminated byte strings owned by the caller. They
//! are copied into owned strings on entry and never referenced after the
//! call returns. A null pointer reads as the empty string and invalid UTF-8
//! is replaced with U+FFFD.

#![allow(non_snake_case)]

use std::{
    ffi::{CStr, CString, c_char},
    io, ptr,
};

use wallset_lib::{ScriptSetter, SystemSetter};

use crate::{
    bridge::{self, Outcome},
    logging,
};

/// Structured result of [`SetBackgroundChecked`].
///
/// `reason` is null when `ok` is true. Otherwise it owns a NUL-terminated
/// description that must be released with [`FreeBackgroundResult`].
#[repr(C)]
#[derive(Debug)]
pub struct BackgroundResult {
    pub ok: bool,
    pub reason: *mut c_char,
}

impl From<Outcome> for BackgroundResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self {
                ok: true,
                reason: ptr::null_mut(),
            },
            Outcome::Failure { reason } => {
                let reason = CString::new(reason.replace('\0', "")).unwrap_or_default();
                Self {
                    ok: false,
                    reason: reason.into_raw(),
                }
            }
        }
    }
}

/// Copies a caller owned C string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of this call.
unsafe fn owned_text(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Sets the desktop background to the image at `path` using placement
/// `mode`. Failures are written to stderr and otherwise ignored.
///
/// # Safety
///
/// `path` and `mode` must each be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SetBackground(path: *const c_char, mode: *const c_char) {
    let (path, mode) = unsafe { (owned_text(path), owned_text(mode)) };
    bridge::set_background(&path, &mode);
}

/// Same as [`SetBackground`], but also hands the outcome back.
///
/// # Safety
///
/// `path` and `mode` must each be null or a valid NUL-terminated string. The
/// returned value must be passed to [`FreeBackgroundResult`] exactly once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SetBackgroundChecked(
    path: *const c_char,
    mode: *const c_char,
) -> BackgroundResult {
    let (path, mode) = unsafe { (owned_text(path), owned_text(mode)) };
    bridge::set_background_with(&SystemSetter, &path, &mode, &mut io::stderr()).into()
}

/// Releases the reason held by a [`BackgroundResult`].
///
/// # Safety
///
/// `result` must come from [`SetBackgroundChecked`] and must not have been
/// freed already.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn FreeBackgroundResult(result: BackgroundResult) {
    if !result.reason.is_null() {
        drop(unsafe { CString::from_raw(result.reason) });
    }
}

/// Sets the background by running `script -m <mode> <path>`. Failures are
/// written to stderr and otherwise ignored.
///
/// # Safety
///
/// `script`, `path` and `mode` must each be null or a valid NUL-terminated
/// string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SetBackgroundWithScript(
    script: *const c_char,
    path: *const c_char,
    mode: *const c_char,
) {
    let (script, path, mode) = unsafe { (owned_text(script), owned_text(path), owned_text(mode)) };
    let setter = ScriptSetter::new(script);
    bridge::set_background_with(&setter, &path, &mode, &mut io::stderr());
}

/// Installs a stderr logger whose level comes from `RUST_LOG`. Safe to call
/// more than once.
#[unsafe(no_mangle)]
pub extern "C" fn InitBackgroundLogging() {
    logging::init_logger();
}
