//! mm backend
//!
//! Output for the memorandum macros (`m.tmac`). mm has no link macro, so links
//! are written as `title <target>` text, and it has no header request here.

use crate::backend::{Backend, RoffWriter};
use crate::common::ListStack;
use crate::event::{Event, HeadingLevel, Inline, ListKind};
use crate::formats::common::{protect, request, write_code_line};

/// Backend for the mm macro package
pub struct MmBackend;

impl Backend for MmBackend {
    fn name(&self) -> &str {
        "mm"
    }

    fn description(&self) -> &str {
        "Memorandum macros (m.tmac)"
    }

    fn macro_file(&self) -> &str {
        "m.tmac"
    }

    fn inline(&self, token: Inline) -> &'static str {
        match token {
            Inline::BoldOpen => "\\fB",
            Inline::ItalicOpen => "\\fI",
            Inline::StyleClose => "\\fP",
            Inline::CodeOpen => "`\\f[CR]",
            Inline::CodeClose => "\\fP'",
        }
    }

    fn render(&self, event: &Event, _lists: &ListStack, out: &mut RoffWriter) {
        match event {
            Event::ParagraphEnd => out.line(".PP"),
            Event::LineBreak => out.line(".br"),
            Event::Text(text) => out.line(protect(text)),
            Event::CodeBlockOpen => {
                out.line(".RS 4");
                out.line(".EX");
            }
            Event::CodeLine(line) => write_code_line(out, line, ".cc !", "!cc ."),
            Event::CodeBlockClose => {
                out.line(".EE");
                out.line(".RE");
            }
            Event::ListOpen(ListKind::Ordered) => out.line(".AL"),
            Event::ListOpen(ListKind::Unordered) => out.line(".BL"),
            Event::ListItemOpen => out.line(".LI"),
            Event::ListItemEnd => out.line(".LE"),
            Event::ListClose => {}
            Event::SectionHeader { level, title } => match level {
                HeadingLevel::Major => request(out, ".SH", title),
                HeadingLevel::Minor | HeadingLevel::Sub => request(out, ".SS", title),
            },
            Event::BoxOpen => out.line(".FT B"),
            Event::BoxClose => out.line(".FT P"),
            Event::ManReference(page) => out.line(protect(page)),
            Event::Hyperlink(link) => out.line(protect(&format!("{} <{}>", link.title, link.target))),
        }
    }
}
