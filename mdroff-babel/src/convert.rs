//! Conversion driver
//!
//! Writes the preamble every document starts with, hands the body to the
//! Markdown transducer and returns the finished markup. Output for one document
//! is built in memory, so a document that fails produces nothing.

use crate::backend::{Preamble, RoffWriter};
use crate::dialect::Dialect;
use crate::document::Document;
use crate::error::ConvertError;
use crate::markdown::transduce;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// First line of every generated document
pub const PREAMBLE_COMMENT: &str = ".\\\" x-roff document";

/// Values used in synthesized headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Section number in a synthesized `.TH`
    pub man_section: String,
    /// Source field in a synthesized `.TH`
    pub header_source: String,
    pub mom_author: String,
    pub mom_paper: String,
    pub mom_printstyle: String,
    /// Date for a synthesized `.TH`; today's local date when unset
    pub date: Option<NaiveDate>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            man_section: "7".to_string(),
            header_source: "document".to_string(),
            mom_author: "md2roff".to_string(),
            mom_paper: "A4".to_string(),
            mom_printstyle: "TYPESET".to_string(),
            date: None,
        }
    }
}

/// Converts documents to one dialect.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    dialect: Dialect,
    options: RenderOptions,
}

impl Converter {
    pub fn new(dialect: Dialect) -> Self {
        Converter {
            dialect,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(dialect: Dialect, options: RenderOptions) -> Self {
        Converter { dialect, options }
    }

    /// Convert one document to a complete roff document.
    pub fn convert(&self, document: &Document) -> Result<String, ConvertError> {
        debug!(document = document.name(), dialect = %self.dialect, "converting");
        let backend = self.dialect.backend();
        let source = document.source();

        let mut out = RoffWriter::new();
        out.line(PREAMBLE_COMMENT);
        out.line(format!(".do mso {}", backend.macro_file()));

        let (title_line, start) = if backend.takes_title_line() {
            split_title_line(source)
        } else {
            (None, 0)
        };
        let preamble = Preamble {
            name: document.name(),
            title_line,
            date: self
                .options
                .date
                .unwrap_or_else(|| Local::now().date_naive()),
            options: &self.options,
        };
        backend.header(&preamble, &mut out);

        transduce(backend, source, start, &mut out)?;
        Ok(out.into_string())
    }
}

/// A leading `# ` (or `#<tab>`) line: its text after the marker, and the offset
/// where the body starts.
fn split_title_line(source: &str) -> (Option<&str>, usize) {
    let Some(rest) = source
        .strip_prefix("# ")
        .or_else(|| source.strip_prefix("#\t"))
    else {
        return (None, 0);
    };
    match rest.find('\n') {
        Some(end) => (Some(&rest[..end]), 2 + end + 1),
        None => (Some(rest), source.len()),
    }
}

/// Convert `source` to `dialect` with default options.
pub fn transform(name: &str, source: &str, dialect: Dialect) -> Result<String, ConvertError> {
    Converter::new(dialect).convert(&Document::new(name, source))
}
