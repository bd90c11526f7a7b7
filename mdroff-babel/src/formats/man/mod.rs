//! man(7) backend
//!
//! Output for the Linux man macro package (`man.tmac`). This is the default
//! dialect.
//!
//! # Event Mapping Table
//!
//! | Event              | man output                          | Notes                                       |
//! |--------------------|-------------------------------------|---------------------------------------------|
//! | ParagraphEnd       | `.PP`                               |                                             |
//! | LineBreak          | `.br`                               |                                             |
//! | CodeBlock          | `.RS 4` `.EX` … `.EE` `.RE`         | Indented example                            |
//! | ListOpen/ListClose | nothing                             | man has no list container                   |
//! | ListItemOpen       | `.IP \(bu 4` or `.IP N. 4`          | Numbers come from the innermost list frame  |
//! | SectionHeader      | `.SH` / `.SS` / `.TP` + bold line   | Level 4+ is a run-in label, not a section   |
//! | Box                | `.B` … `.FT P`                      |                                             |
//! | ManReference       | `\fBname\fP(section)`               |                                             |
//! | Hyperlink          | `.UR`/`.UE`, `.MT`/`.ME` for mail   |                                             |
//!
//! The level-4 run-in label is specific to this dialect: man has only two
//! section levels, so deeper headers become a tagged paragraph whose tag is
//! the bold title.

use crate::backend::{Backend, Preamble, RoffWriter};
use crate::common::ListStack;
use crate::event::{Event, HeadingLevel, Inline, ListKind};
use crate::formats::common::{protect, request, write_code_line, write_th};

/// Backend for the man macro package
pub struct ManBackend;

impl Backend for ManBackend {
    fn name(&self) -> &str {
        "man"
    }

    fn description(&self) -> &str {
        "Linux man pages (man.tmac)"
    }

    fn macro_file(&self) -> &str {
        "man.tmac"
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
            Event::ListOpen(_) | Event::ListItemEnd | Event::ListClose => {}
            Event::ListItemOpen => match lists.peek() {
                Some(frame) if frame.kind == ListKind::Unordered => out.line(".IP \\(bu 4"),
                Some(frame) => out.line(format!(".IP {}. 4", frame.counter)),
                None => {}
            },
            Event::SectionHeader { level, title } => match level {
                HeadingLevel::Major => request(out, ".SH", title),
                HeadingLevel::Minor => request(out, ".SS", title),
                HeadingLevel::Sub => {
                    out.line(".TP");
                    out.line(format!("\\fB{title}\\fR"));
                }
            },
            Event::BoxOpen => out.line(".B"),
            Event::BoxClose => out.line(".FT P"),
            Event::ManReference(page) => match page.split_once(' ') {
                Some((name, section)) => out.line(format!("\\fB{name}\\fP({section})")),
                None => out.line(format!("\\fB{page}\\fP")),
            },
            Event::Hyperlink(link) => {
                if link.mailto {
                    request(out, ".MT", link.address());
                    out.line(protect(&link.title));
                    out.line(".ME");
                } else {
                    request(out, ".UR", &link.target);
                    out.line(protect(&link.title));
                    out.line(".UE");
                }
            }
        }
    }
}
