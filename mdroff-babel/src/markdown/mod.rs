//! Markdown reader
//!
//! This module recognizes the Markdown subset md2roff supports and turns it into
//! [`Event`](crate::event::Event)s for a backend.
//!
//! # No Parser Library
//!
//! The input is not parsed into a tree. Output is produced while scanning, so
//! memory stays flat and a construct is rendered as soon as it is recognized.
//! The only structure carried across lines is the stack of open lists.
//!
//! # Element Mapping Table
//!
//! | Markdown                     | Event(s)                                      | Notes                                    |
//! |------------------------------|-----------------------------------------------|------------------------------------------|
//! | Blank line                   | ParagraphEnd                                  | Also closes the innermost open list      |
//! | `#`… title                   | SectionHeader                                 | 1-2 `#` major, 3 minor, 4+ sub           |
//! | `## title ##`                | BoxOpen, LineBreak, Text, LineBreak, BoxClose | Any header line ending in `#`            |
//! | Title + `===`/`---`/`***`    | SectionHeader (major)                         | Only the line above the rule is a title  |
//! | `-`/`+`/`*` item             | ListOpen(unordered), ListItemOpen             | Marker needs a following space or tab    |
//! | `N.` item                    | ListOpen(ordered), ListItemOpen               | First marker seeds the numbering         |
//! | Indented marker              | nested ListOpen                               | Only inside an open list, up to 32 deep  |
//! | ```` ``` ```` fence          | CodeBlockOpen, CodeLine…, CodeBlockClose      | Info string ignored; lines verbatim      |
//! | `[label](target)`            | Hyperlink                                     | `![label](target)` too                   |
//! | `[name section](man)`        | ManReference                                  |                                          |
//! | InlineContent:               |                                               |                                          |
//! |   `**x**` / `__x__`          | Inline::BoldOpen … StyleClose                 | Opens only after a boundary character    |
//! |   `*x*` / `_x_`              | Inline::ItalicOpen … StyleClose               | Opens only after a boundary character    |
//! |   `` `x` ``                  | Inline::CodeOpen … CodeClose                  | Must close before end of input           |
//! |   `\c`                       | literal `c`                                   | `\n \r \t \f \b \a \e` are control chars |
//!
//! # Lossy Conversions
//!
//! - Header titles are copied raw; inline markup in them is not interpreted
//! - Whitespace runs between punctuation collapse to nothing
//! - Tables, block quotes and HTML are passed through as text

pub mod transducer;

pub use transducer::transduce;
