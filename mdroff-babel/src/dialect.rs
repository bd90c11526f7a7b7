//! Output dialect selection
//!
//! The set of dialects is closed, so selection is an enum rather than a
//! registry of trait objects. Each variant resolves to its [`Backend`].

use crate::backend::Backend;
use crate::error::UnknownDialect;
use crate::formats::{ManBackend, MdocBackend, MmBackend, MomBackend};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A roff macro package to generate markup for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Man,
    Mdoc,
    Mm,
    Mom,
}

impl Dialect {
    /// All dialects, in the order they are listed to users
    pub const ALL: [Dialect; 4] = [Dialect::Man, Dialect::Mdoc, Dialect::Mm, Dialect::Mom];

    pub fn backend(self) -> &'static dyn Backend {
        match self {
            Dialect::Man => &ManBackend,
            Dialect::Mdoc => &MdocBackend,
            Dialect::Mm => &MmBackend,
            Dialect::Mom => &MomBackend,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Man => "man",
            Dialect::Mdoc => "mdoc",
            Dialect::Mm => "mm",
            Dialect::Mom => "mom",
        }
    }

    pub fn description(self) -> &'static str {
        self.backend().description()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.name() == s)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}
