// SPDX-License-Identifier: MPL-2.0

use std::{
    ffi::{CStr, CString},
    ptr,
};

use dynpaper_bridge::ffi::{
    BackgroundResult, FreeBackgroundResult, SetBackground, SetBackgroundChecked,
    SetBackgroundWithScript,
};

fn c(text: &str) -> CString {
    CString::new(text).unwrap()
}

fn reason(result: &BackgroundResult) -> String {
    unsafe { CStr::from_ptr(result.reason) }
        .to_string_lossy()
        .into_owned()
}

#[test]
fn unknown_mode_is_reported_not_replaced() {
    let (path, mode) = (c("/tmp/sunset.jpg"), c("bogus-mode"));

    let result = unsafe { SetBackgroundChecked(path.as_ptr(), mode.as_ptr()) };

    assert!(!result.ok);
    assert!(reason(&result).contains("bogus-mode"));
    unsafe { FreeBackgroundResult(result) };
}

#[test]
fn null_arguments_do_not_crash() {
    let result = unsafe { SetBackgroundChecked(ptr::null(), ptr::null()) };

    assert!(!result.ok);
    assert!(reason(&result).contains("unsupported background mode"));
    unsafe { FreeBackgroundResult(result) };
}

#[test]
fn fire_and_forget_returns_on_failure() {
    let (path, mode) = (c("/nonexistent.jpg"), c("no-such-mode"));
    unsafe { SetBackground(path.as_ptr(), mode.as_ptr()) };
}

#[test]
fn freeing_a_success_is_a_no_op() {
    unsafe {
        FreeBackgroundResult(BackgroundResult {
            ok: true,
            reason: ptr::null_mut(),
        })
    };
}

#[cfg(unix)]
mod script {
    use super::*;
    use std::{
        env, fs,
        io::Write,
        os::unix::fs::PermissionsExt,
        path::Path,
        process::Command,
        thread,
        time::{Duration, Instant},
    };

    const CHILD_ENV: &str = "DYNPAPER_BRIDGE_SLOW_SCRIPT";

    fn write_script(dir: &Path, out: &Path) -> CString {
        let script = dir.join("set-bg");
        let mut file = fs::File::create(&script).unwrap();
        writeln!(file, "#!/bin/sh\nprintf '%s|' \"$@\" > '{}'", out.display()).unwrap();
        drop(file);
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        c(script.to_str().unwrap())
    }

    #[test]
    fn script_receives_mode_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("args");
        let script = write_script(dir.path(), &out);
        let (path, mode) = (c("/tmp/sunset.jpg"), c("center"));

        unsafe { SetBackgroundWithScript(script.as_ptr(), path.as_ptr(), mode.as_ptr()) };

        assert_eq!(fs::read_to_string(out).unwrap(), "-m|center|/tmp/sunset.jpg|");
    }

    #[test]
    fn script_is_not_run_for_unknown_mode() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("args");
        let script = write_script(dir.path(), &out);
        let (path, mode) = (c("/tmp/sunset.jpg"), c("bogus-mode"));

        unsafe { SetBackgroundWithScript(script.as_ptr(), path.as_ptr(), mode.as_ptr()) };

        assert!(!out.exists());
    }

    fn run_slow_failing_calls(script: &Path) {
        let script = c(script.to_str().unwrap());
        thread::scope(|scope| {
            for i in 0..4 {
                let script = &script;
                scope.spawn(move || {
                    let path = c(&format!("/img/{i}.png"));
                    let mode = c("stretch");
                    unsafe {
                        SetBackgroundWithScript(script.as_ptr(), path.as_ptr(), mode.as_ptr())
                    };
                });
            }
        });
    }

    #[test]
    fn concurrent_script_failures_overlap_and_keep_lines_whole() {
        if let Some(script) = env::var_os(CHILD_ENV) {
            run_slow_failing_calls(Path::new(&script));
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-fail");
        fs::write(&script, "#!/bin/sh\nsleep 1\nexit 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let started = Instant::now();
        let output = Command::new(env::current_exe().unwrap())
            .args([
                "script::concurrent_script_failures_overlap_and_keep_lines_whole",
                "--exact",
                "--nocapture",
                "--test-threads=1",
            ])
            .env(CHILD_ENV, &script)
            .output()
            .unwrap();
        let elapsed = started.elapsed();

        assert!(output.status.success());
        assert!(
            elapsed < Duration::from_millis(3000),
            "calls ran one after another: {elapsed:?}"
        );

        let stderr = String::from_utf8(output.stderr).unwrap();
        let reports: Vec<_> = stderr
            .lines()
            .filter(|line| line.contains("as the background with mode"))
            .collect();
        assert_eq!(reports.len(), 4);
        for i in 0..4 {
            let path = format!("/img/{i}.png");
            let line = reports.iter().find(|line| line.contains(&path)).unwrap();
            assert!(line.starts_with(&format!(
                "Error occurred when setting {path} as the background with mode stretch: "
            )));
            assert!(line.ends_with("(exit status: 1)"));
            assert_eq!(line.matches("Error occurred").count(), 1);
        }
    }
}
