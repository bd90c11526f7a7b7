//! Input documents
//!
//! A document is a display name plus its full source text. The name appears in
//! synthesized headers (`.TH`, `.TITLE`) and in error messages.

use crate::error::ConvertError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Name used for a document read from standard input
pub const STDIN_NAME: &str = "stdin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    source: String,
}

impl Document {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Load a file. The path as given becomes the document name. Invalid UTF-8
    /// is replaced rather than rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| ConvertError::load(format!("Unable to open '{name}'"), e))?;
        Self::from_reader(name, file)
    }

    /// Read a whole document from `reader`.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, ConvertError> {
        let name = name.into();
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ConvertError::load(format!("Unable to read '{name}'"), e))?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Document { name, source })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
