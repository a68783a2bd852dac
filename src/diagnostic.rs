// SPDX-License-Identifier: MPL-2.0

//! The one-line failure report written to the diagnostic stream.

use std::io::{self, Write};

const PREFIX: &str = "Error occurred when setting ";

/// Formats the failure report for `path` and `mode`, newline included.
///
/// Line breaks inside any of the pieces are escaped so the report always
/// occupies exactly one line.
pub fn format_line(path: &str, mode: &str, reason: &str) -> String {
    format!(
        "{PREFIX}{} as the background with mode {}: {}\n",
        escape(path),
        escape(mode),
        escape(reason)
    )
}

/// Writes the report with a single `write_all` so concurrent reports on a
/// shared stream never interleave.
pub fn write_line<W: Write + ?Sized>(
    sink: &mut W,
    path: &str,
    mode: &str,
    reason: &str,
) -> io::Result<()> {
    let line = format_line(path, mode, reason);
    sink.write_all(line.as_bytes())?;
    sink.flush()
}

fn escape(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_owned();
    }
    text.replace('\n', "\\n").replace('\r', "\\r")
}
