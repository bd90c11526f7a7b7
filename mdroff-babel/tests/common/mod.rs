//! Helpers shared by the integration tests.

use chrono::NaiveDate;
use mdroff_babel::{Converter, Dialect, Document, RenderOptions};
use std::path::PathBuf;

/// Options with a fixed date so synthesized headers are stable.
pub fn fixed_options() -> RenderOptions {
    RenderOptions {
        date: NaiveDate::from_ymd_opt(2024, 5, 1),
        ..RenderOptions::default()
    }
}

/// Convert `source` as a document named "doc".
pub fn convert(dialect: Dialect, source: &str) -> String {
    Converter::with_options(dialect, fixed_options())
        .convert(&Document::new("doc", source))
        .expect("conversion failed")
}

/// Convert a file from tests/fixtures, named by its file name.
pub fn convert_fixture(dialect: Dialect, name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let source = std::fs::read_to_string(&path).expect("missing fixture");
    Converter::with_options(dialect, fixed_options())
        .convert(&Document::new(name, source))
        .expect("conversion failed")
}

/// Output after the two preamble lines and the header lines a dialect writes.
pub fn body(output: &str, header_lines: usize) -> String {
    output
        .lines()
        .skip(2 + header_lines)
        .map(|line| format!("{line}\n"))
        .collect()
}
