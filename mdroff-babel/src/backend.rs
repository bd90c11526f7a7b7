//! Backend trait definition
//!
//! This module defines the trait every roff dialect implements. A backend is a
//! pure mapping from [`Event`]s to lines of dialect-specific markup: it never
//! looks at the source text and never mutates the list stack it is given.

use crate::common::ListStack;
use crate::convert::RenderOptions;
use crate::event::{Event, Inline};
use chrono::NaiveDate;

/// Line-oriented output buffer for one document.
///
/// Every call to [`RoffWriter::line`] produces exactly one newline-terminated
/// output line, so a control line can never be glued onto running text.
#[derive(Debug, Default)]
pub struct RoffWriter {
    buf: String,
}

impl RoffWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl AsRef<str>) {
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Everything a backend needs to write its header lines.
#[derive(Debug, Clone, Copy)]
pub struct Preamble<'a> {
    /// Display name of the document (file name, or "stdin")
    pub name: &'a str,
    /// Rest of a leading `# ` line, for backends that take their header from it
    pub title_line: Option<&'a str>,
    pub date: NaiveDate,
    pub options: &'a RenderOptions,
}

/// Trait for roff dialects
///
/// # Examples
///
/// ```ignore
/// struct MyDialect;
///
/// impl Backend for MyDialect {
///     fn name(&self) -> &str {
///         "my-dialect"
///     }
///
///     fn macro_file(&self) -> &str {
///         "my.tmac"
///     }
///
///     fn inline(&self, token: Inline) -> &'static str {
///         match token { /* ... */ }
///     }
///
///     fn render(&self, event: &Event, lists: &ListStack, out: &mut RoffWriter) {
///         match event { /* ... */ }
///     }
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The name of this dialect (e.g. "man", "mom")
    fn name(&self) -> &str;

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// Macro file loaded by the package-activation line (`.do mso <file>`)
    fn macro_file(&self) -> &str;

    /// Whether a leading `# ` line is consumed as the header directive.
    ///
    /// Backends returning `false` see that line as an ordinary header.
    fn takes_title_line(&self) -> bool {
        false
    }

    /// Write the title/header lines that follow the package-activation line.
    ///
    /// The default writes nothing.
    fn header(&self, _preamble: &Preamble<'_>, _out: &mut RoffWriter) {}

    /// Markup inserted into running text for an inline token
    fn inline(&self, token: Inline) -> &'static str;

    /// Write the lines for one event.
    fn render(&self, event: &Event, lists: &ListStack, out: &mut RoffWriter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_terminates_every_line() {
        let mut out = RoffWriter::new();
        out.line(".PP");
        out.line(String::from("text"));
        assert_eq!(out.as_str(), ".PP\ntext\n");
        assert_eq!(out.into_string(), ".PP\ntext\n");
    }
}
