//! mom backend
//!
//! Output for the mom macro package (`mom.tmac`). mom is a typesetting package
//! rather than a manual-page package, so the header is a `.TITLE`/`.AUTHOR`
//! block followed by `.START`, and fonts are switched through its string
//! registers (`\*[BD]`, `\*[IT]`, `\*[PREV]`).
//!
//! Nested lists alternate their enumerator: ordered lists go
//! DIGIT, ALPHA, DIGIT, alpha and then stay on DIGIT; unordered lists alternate
//! BULLET and DASH.

use crate::backend::{Backend, Preamble, RoffWriter};
use crate::common::ListStack;
use crate::event::{Event, HeadingLevel, Inline, ListKind};
use crate::formats::common::{protect, quote_arg, write_code_line};

/// Backend for the mom macro package
pub struct MomBackend;

impl MomBackend {
    fn enumerator(kind: ListKind, depth: usize) -> &'static str {
        match kind {
            ListKind::Ordered => match depth {
                2 => "ALPHA",
                4 => "alpha",
                _ => "DIGIT",
            },
            ListKind::Unordered if depth % 2 == 1 => "BULLET",
            ListKind::Unordered => "DASH",
        }
    }
}

impl Backend for MomBackend {
    fn name(&self) -> &str {
        "mom"
    }

    fn description(&self) -> &str {
        "Typeset documents with the mom macros (mom.tmac)"
    }

    fn macro_file(&self) -> &str {
        "mom.tmac"
    }

    fn header(&self, preamble: &Preamble<'_>, out: &mut RoffWriter) {
        let options = preamble.options;
        out.line(format!(".TITLE \"{}\"", quote_arg(preamble.name)));
        out.line(format!(".AUTHOR \"{}\"", quote_arg(&options.mom_author)));
        out.line(format!(".PAPER {}", options.mom_paper));
        out.line(format!(".PRINTSTYLE {}", options.mom_printstyle));
        out.line(".START");
    }

    fn inline(&self, token: Inline) -> &'static str {
        match token {
            Inline::BoldOpen => "\\*[BD]",
            Inline::ItalicOpen => "\\*[IT]",
            Inline::StyleClose => "\\*[PREV]",
            Inline::CodeOpen => "`\\*[CODE]",
            Inline::CodeClose => "\\*[CODE OFF]'",
        }
    }

    fn render(&self, event: &Event, lists: &ListStack, out: &mut RoffWriter) {
        match event {
            Event::ParagraphEnd => out.line(".PP"),
            Event::LineBreak => out.line(".BR"),
            Event::Text(text) => out.line(protect(text)),
            Event::CodeBlockOpen => out.line(".CODE"),
            Event::CodeLine(line) => write_code_line(out, line, ".ESC_CHAR !", ".ESC_CHAR ."),
            Event::CodeBlockClose => out.line(".CODE OFF"),
            Event::ListOpen(kind) => {
                out.line(format!(".LIST {}", Self::enumerator(*kind, lists.len())));
            }
            Event::ListItemOpen => out.line(".ITEM"),
            Event::ListItemEnd => {}
            Event::ListClose => out.line(".LIST OFF"),
            Event::SectionHeader { level, title } => {
                let n = match level {
                    HeadingLevel::Major => 1,
                    HeadingLevel::Minor => 2,
                    HeadingLevel::Sub => 3,
                };
                out.line(format!(".HEADING {n} \"{}\"", quote_arg(title)));
            }
            Event::BoxOpen | Event::BoxClose => out.line(".DRH"),
            Event::ManReference(page) => out.line(protect(page)),
            Event::Hyperlink(link) => out.line(protect(&format!(
                "{} \\*[UL]{}\\*[ULX]",
                link.title, link.target
            ))),
        }
    }
}
