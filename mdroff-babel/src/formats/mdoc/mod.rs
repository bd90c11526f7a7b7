//! mdoc(7) backend
//!
//! Output for the BSD semantic man macro package (`mdoc.tmac`). Lists map to
//! `.Bl`/`.El` blocks; unordered lists alternate between bullets and dashes by
//! nesting depth.

use crate::backend::{Backend, Preamble, RoffWriter};
use crate::common::ListStack;
use crate::event::{Event, HeadingLevel, Inline, ListKind};
use crate::formats::common::{protect, quote_arg, request, write_code_line, write_th};

/// Backend for the mdoc macro package
pub struct MdocBackend;

impl Backend for MdocBackend {
    fn name(&self) -> &str {
        "mdoc"
    }

    fn description(&self) -> &str {
        "BSD man pages (mdoc.tmac)"
    }

    fn macro_file(&self) -> &str {
        "mdoc.tmac"
    }

    fn takes_title_line(&self) -> bool {
        true
    }

    fn header(&self, preamble: &Preamble<'_>, out: &mut RoffWriter) {
        write_th(preamble, out);
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

    fn render(&self, event: &Event, lists: &ListStack, out: &mut RoffWriter) {
        match event {
            Event::ParagraphEnd => out.line(".Pp"),
            Event::LineBreak => out.line(".br"),
            Event::Text(text) => out.line(protect(text)),
            Event::CodeBlockOpen => out.line(".Bd -literal -offset indent"),
            Event::CodeLine(line) => write_code_line(out, line, ".cc !", "!cc ."),
            Event::CodeBlockClose => out.line(".Ed"),
            Event::ListOpen(ListKind::Ordered) => out.line(".Bl -enum -offset indent"),
            Event::ListOpen(ListKind::Unordered) => {
                let mark = if lists.len() % 2 == 1 { "bullet" } else { "dash" };
                out.line(format!(".Bl -{mark} -offset indent"));
            }
            Event::ListItemOpen => out.line(".It"),
            Event::ListItemEnd => {}
            Event::ListClose => out.line(".El"),
            Event::SectionHeader { level, title } => match level {
                HeadingLevel::Major => request(out, ".Sh", title),
                HeadingLevel::Minor | HeadingLevel::Sub => request(out, ".Ss", title),
            },
            Event::BoxOpen => out.line(".FT B"),
            Event::BoxClose => out.line(".FT P"),
            Event::ManReference(page) => request(out, ".Xr", page),
            Event::Hyperlink(link) => {
                if link.mailto {
                    out.line(format!(".An {} Aq Mt {}", link.title, link.address()));
                } else {
                    out.line(format!(".Lk {} \"{}\"", link.target, quote_arg(&link.title)));
                }
            }
        }
    }
}
