//! Common utilities for the roff backends
//!
//! Helpers for the pieces of output that several dialects share: the `.TH`
//! header of the man-style packages, protection of text lines that would read
//! as requests, and the control-character swap around verbatim lines.

use crate::backend::{Preamble, RoffWriter};
use std::borrow::Cow;

/// Write a request line, omitting the separating space when there are no
/// arguments.
pub(crate) fn request(out: &mut RoffWriter, name: &str, args: &str) {
    if args.is_empty() {
        out.line(name);
    } else {
        out.line(format!("{name} {args}"));
    }
}

/// Write a `.TH` line, taken from the leading `# ` line when present and
/// synthesized from the document name and date otherwise.
pub(crate) fn write_th(preamble: &Preamble<'_>, out: &mut RoffWriter) {
    match preamble.title_line {
        Some(line) => request(out, ".TH", line.trim()),
        None => out.line(format!(
            ".TH {} {} {} {}",
            preamble.name,
            preamble.options.man_section,
            preamble.date.format("%Y-%m-%d"),
            preamble.options.header_source,
        )),
    }
}

/// A line of running text starting with `.` or `'` would be read as a request;
/// the zero-width `\&` keeps it text.
pub(crate) fn protect(line: &str) -> Cow<'_, str> {
    if line.starts_with('.') || line.starts_with('\'') {
        Cow::Owned(format!("\\&{line}"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Text for a double-quoted request argument. An embedded `"` would end the
/// argument, so it becomes `\(dq`.
pub(crate) fn quote_arg(arg: &str) -> Cow<'_, str> {
    if arg.contains('"') {
        Cow::Owned(arg.replace('"', "\\(dq"))
    } else {
        Cow::Borrowed(arg)
    }
}

/// Write one verbatim line, bracketing it with the control-character swap when
/// it starts with `.`.
pub(crate) fn write_code_line(out: &mut RoffWriter, line: &str, swap_on: &str, swap_off: &str) {
    if line.starts_with('.') {
        out.line(swap_on);
        out.line(line);
        out.line(swap_off);
    } else {
        out.line(line);
    }
}
