//! Defines the semantic events raised by the transducer.
//!
//! Every construct the scanner recognizes is reported as one [`Event`]. Backends
//! turn events into roff lines; nothing else crosses the boundary between the
//! scanner and the dialect-specific code.

/// The kind of an open list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// Section granularity derived from the number of leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `#` and `##`, and setext headers
    Major,
    /// `###`
    Minor,
    /// `####` and deeper
    Sub,
}

impl HeadingLevel {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0..=2 => HeadingLevel::Major,
            3 => HeadingLevel::Minor,
            _ => HeadingLevel::Sub,
        }
    }
}

/// A `[title](target)` link that is not a man page reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub title: String,
    pub target: String,
    /// Targets containing `@` are rendered with the mail macros.
    pub mailto: bool,
}

impl Link {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        let target = target.into();
        Link {
            title: title.into(),
            mailto: target.contains('@'),
            target,
        }
    }

    /// The address without a `mailto:` scheme, for the mail macros.
    pub fn address(&self) -> &str {
        self.target
            .strip_prefix("mailto:")
            .unwrap_or(&self.target)
    }
}

/// A single recognized construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ParagraphEnd,
    LineBreak,
    /// A squeezed line of running text (inline markup already applied)
    Text(String),
    CodeBlockOpen,
    /// One verbatim line inside a fenced block, without its newline
    CodeLine(String),
    CodeBlockClose,
    /// Raised after the frame has been pushed, so backends see the new depth
    ListOpen(ListKind),
    /// Raised after the counter of the innermost frame has been advanced
    ListItemOpen,
    ListItemEnd,
    /// Raised before the frame is popped
    ListClose,
    SectionHeader {
        level: HeadingLevel,
        title: String,
    },
    BoxOpen,
    BoxClose,
    /// `[name section](man)`
    ManReference(String),
    Hyperlink(Link),
}

/// Inline markup tokens inserted into running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    BoldOpen,
    ItalicOpen,
    /// Return to the previous font
    StyleClose,
    CodeOpen,
    CodeClose,
}
