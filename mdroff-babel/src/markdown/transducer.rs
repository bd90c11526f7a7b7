//! Single-pass Markdown scanner
//!
//! The transducer walks the source once, character by character, and raises
//! [`Event`]s as it recognizes block constructs. Running text accumulates in a
//! pending buffer (with inline markup already substituted) and is flushed as a
//! squeezed [`Event::Text`] line whenever a block construct needs to start on a
//! fresh output line.
//!
//! State kept between characters:
//! - whether the cursor sits at the start of a source line
//! - whether a fenced code block is open
//! - the bold and italic toggles
//! - the stack of open lists
//! - the pending text buffer and the offset in it where the current source
//!   line began (needed to split off a setext header title)

use crate::backend::{Backend, RoffWriter};
use crate::common::squeeze::is_space;
use crate::common::{squeeze, Cursor, ListFrame, ListStack};
use crate::error::ConvertError;
use crate::event::{Event, HeadingLevel, Inline, Link, ListKind};
use tracing::{debug, trace, warn};

const FENCE: &str = "```";

/// Characters after which `*`/`_` may open an emphasis span.
const EMPHASIS_BOUNDARY: &str = "({[,.;`'\" \t\n";

/// Target that turns a link into a man page reference.
const MAN_REFERENCE_TARGET: &str = "man";

/// Width of a tab when measuring list indentation.
const TAB_WIDTH: usize = 4;

/// Convert the Markdown in `source`, starting at byte offset `start`, writing
/// the body markup for `backend` to `out`.
///
/// `start` lets the caller skip a title line it has already consumed while
/// keeping error positions relative to the whole document.
pub fn transduce(
    backend: &dyn Backend,
    source: &str,
    start: usize,
    out: &mut RoffWriter,
) -> Result<(), ConvertError> {
    let mut cursor = Cursor::new(source);
    cursor.reset(start);
    Transducer {
        backend,
        cursor,
        out,
        lists: ListStack::new(),
        pending: String::new(),
        line_mark: 0,
        at_line_start: true,
        in_code: false,
        bold: false,
        italic: false,
    }
    .run()
}

#[derive(Debug, Clone, Copy)]
enum Emphasis {
    Bold,
    Italic,
}

struct Transducer<'src, 'out> {
    backend: &'src dyn Backend,
    cursor: Cursor<'src>,
    out: &'out mut RoffWriter,
    lists: ListStack,
    pending: String,
    line_mark: usize,
    at_line_start: bool,
    in_code: bool,
    bold: bool,
    italic: bool,
}

impl Transducer<'_, '_> {
    fn run(mut self) -> Result<(), ConvertError> {
        while !self.cursor.is_eof() {
            if self.in_code {
                self.code_line();
                continue;
            }
            // Escapes win over every block rule and leave the line mid-text.
            if self.cursor.peek() == Some('\\') {
                self.escape();
                continue;
            }
            if self.at_line_start {
                self.at_line_start = false;
                if self.line_start() {
                    continue;
                }
            }
            self.inline()?;
        }
        self.finish();
        Ok(())
    }

    fn emit(&mut self, event: Event) {
        trace!(?event, "emit");
        self.backend.render(&event, &self.lists, self.out);
    }

    /// Emit the pending buffer as one squeezed text line.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let line = squeeze(&self.pending);
            if !line.is_empty() {
                self.emit(Event::Text(line));
            }
            self.pending.clear();
        }
        self.line_mark = 0;
    }

    /// Try the block rules that only apply at the start of a source line.
    /// Returns `true` when one of them consumed input.
    fn line_start(&mut self) -> bool {
        let Some(c) = self.cursor.peek() else {
            return false;
        };
        match c {
            '\n' => {
                self.blank_line();
                true
            }
            '#' => {
                self.header();
                true
            }
            '*' | '+' | '-' if self.marker_follows() => {
                self.unordered_item(0);
                true
            }
            '0'..='9' => self.ordered_item(0),
            '`' if self.cursor.starts_with(FENCE) => {
                self.open_code_block();
                true
            }
            ' ' | '\t' if !self.lists.is_empty() => self.nested_item(),
            _ => false,
        }
    }

    fn marker_follows(&self) -> bool {
        matches!(self.cursor.peek_nth(1), Some(' ' | '\t'))
    }

    fn blank_line(&mut self) {
        self.cursor.bump();
        self.flush();
        if !self.lists.is_empty() {
            self.close_list();
        }
        self.emit(Event::ParagraphEnd);
        self.at_line_start = true;
    }

    fn header(&mut self) {
        self.flush();
        let line = self.cursor.take_line();
        if line.ends_with('#') {
            let title = line.trim_matches(|c: char| c == '#' || is_space(c));
            self.emit(Event::BoxOpen);
            self.emit(Event::LineBreak);
            if !title.is_empty() {
                self.emit(Event::Text(title.to_string()));
            }
            self.emit(Event::LineBreak);
            self.emit(Event::BoxClose);
        } else {
            let depth = line.chars().take_while(|&c| c == '#').count();
            let title = line[depth..].trim_matches(is_space);
            self.emit(Event::SectionHeader {
                level: HeadingLevel::from_depth(depth),
                title: title.to_string(),
            });
        }
        self.at_line_start = true;
    }

    fn unordered_item(&mut self, indent: usize) {
        self.cursor.bump();
        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        self.flush();
        self.begin_item(ListKind::Unordered, indent, 1);
    }

    /// `digits.` starts an ordered item; anything else leaves the cursor where
    /// it was and returns `false`.
    fn ordered_item(&mut self, indent: usize) -> bool {
        let mark = self.cursor.pos();
        let digits = self.cursor.eat_while(|c| c.is_ascii_digit());
        if digits.is_empty() || !self.cursor.eat(".") {
            self.cursor.reset(mark);
            return false;
        }
        // Runs too long for a u64 still open the list; the number saturates.
        let number = digits.parse::<u64>().unwrap_or(u64::MAX);
        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        self.flush();
        self.begin_item(ListKind::Ordered, indent, number);
        true
    }

    /// An indented line inside an open list: a marker there is a list item at
    /// that indentation.
    fn nested_item(&mut self) -> bool {
        let mark = self.cursor.pos();
        let indent: usize = self
            .cursor
            .eat_while(|c| c == ' ' || c == '\t')
            .chars()
            .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
            .sum();
        let matched = match self.cursor.peek() {
            Some('*' | '+' | '-') if self.marker_follows() => {
                self.unordered_item(indent);
                true
            }
            Some('0'..='9') => self.ordered_item(indent),
            _ => false,
        };
        if !matched {
            self.cursor.reset(mark);
        }
        matched
    }

    /// Start a list item whose marker sits at `indent`. `seed` numbers the
    /// first item when this marker opens a new list.
    fn begin_item(&mut self, kind: ListKind, indent: usize, seed: u64) {
        while self.lists.len() > 1 && self.lists.peek().is_some_and(|top| indent < top.indent) {
            self.close_list();
        }

        let deeper = self.lists.peek().map(|top| indent > top.indent);
        match deeper {
            None => self.open_list(kind, indent, seed),
            Some(true) if !self.lists.is_full() => self.open_list(kind, indent, seed),
            Some(nested) => {
                if nested {
                    warn!(
                        depth = self.lists.len(),
                        "list nesting too deep, continuing the innermost list"
                    );
                }
                self.emit(Event::ListItemEnd);
                if let Some(top) = self.lists.peek_mut() {
                    if top.kind == ListKind::Ordered {
                        top.counter = top.counter.saturating_add(1);
                    }
                }
                self.emit(Event::ListItemOpen);
            }
        }
    }

    fn open_list(&mut self, kind: ListKind, indent: usize, seed: u64) {
        let counter = match kind {
            ListKind::Ordered => seed,
            ListKind::Unordered => 1,
        };
        self.lists.push(ListFrame {
            kind,
            counter,
            indent,
        });
        debug!(?kind, depth = self.lists.len(), "list opened");
        self.emit(Event::ListOpen(kind));
        self.emit(Event::ListItemOpen);
    }

    fn close_list(&mut self) {
        self.emit(Event::ListItemEnd);
        self.emit(Event::ListClose);
        self.lists.pop();
    }

    fn open_code_block(&mut self) {
        self.flush();
        let info = self.cursor.take_line()[FENCE.len()..].trim();
        debug!(info, "code block opened");
        self.in_code = true;
        self.emit(Event::CodeBlockOpen);
    }

    fn code_line(&mut self) {
        if self.cursor.starts_with(FENCE) {
            self.cursor.take_line();
            self.in_code = false;
            self.at_line_start = true;
            self.emit(Event::CodeBlockClose);
            return;
        }
        let line = self.cursor.take_line();
        self.emit(Event::CodeLine(line.to_string()));
    }

    fn escape(&mut self) {
        self.cursor.bump();
        let c = match self.cursor.bump() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('f') => '\x0c',
            Some('b') => '\x08',
            Some('a') => '\x07',
            Some('e') => '\x1b',
            Some(other) => other,
            None => '\\',
        };
        self.pending.push(c);
        self.at_line_start = false;
    }

    /// Consume one character of running text.
    fn inline(&mut self) -> Result<(), ConvertError> {
        let Some(c) = self.cursor.peek() else {
            return Ok(());
        };
        match c {
            '\n' => self.end_of_line(),
            '*' | '_' if self.cursor.peek_nth(1) == Some(c) => self.emphasis(Emphasis::Bold, 2),
            '*' | '_' => self.emphasis(Emphasis::Italic, 1),
            '`' => self.code_span()?,
            '[' => self.link(),
            '!' if self.cursor.peek_nth(1) == Some('[') => self.link(),
            _ => {
                self.cursor.bump();
                self.pending.push(c);
            }
        }
        Ok(())
    }

    fn end_of_line(&mut self) {
        let rule_follows = self.cursor.next_line().is_some_and(is_rule);
        self.cursor.bump();
        self.at_line_start = true;

        if !rule_follows {
            self.pending.push(' ');
            self.line_mark = self.pending.len();
            return;
        }

        self.cursor.take_line();
        let title = squeeze(&self.pending[self.line_mark..]);
        self.pending.truncate(self.line_mark);
        self.flush();
        if !title.is_empty() {
            self.emit(Event::SectionHeader {
                level: HeadingLevel::Major,
                title,
            });
        }
    }

    fn emphasis(&mut self, kind: Emphasis, width: usize) {
        let (active, open) = match kind {
            Emphasis::Bold => (&mut self.bold, Inline::BoldOpen),
            Emphasis::Italic => (&mut self.italic, Inline::ItalicOpen),
        };
        let opens = self
            .cursor
            .prev()
            .map_or(true, |prev| EMPHASIS_BOUNDARY.contains(prev));

        let delimiter = &self.cursor.rest()[..width];
        if *active {
            *active = false;
            self.pending.push_str(self.backend.inline(Inline::StyleClose));
        } else if opens {
            *active = true;
            self.pending.push_str(self.backend.inline(open));
        } else {
            self.pending.push_str(delimiter);
        }
        self.cursor.eat(delimiter);
    }

    fn code_span(&mut self) -> Result<(), ConvertError> {
        let start = self.cursor.pos();
        self.cursor.bump();
        let rest = self.cursor.rest();
        let Some(end) = rest.find('`') else {
            let (line, column) = self.cursor.line_col(start);
            return Err(ConvertError::UnterminatedCodeSpan { line, column });
        };
        let code = &rest[..end];

        self.pending.push_str(self.backend.inline(Inline::CodeOpen));
        for c in code.chars() {
            if c == '\\' {
                self.pending.push_str("\\e");
            } else {
                self.pending.push(c);
            }
        }
        self.pending.push_str(self.backend.inline(Inline::CodeClose));

        self.cursor.eat(code);
        self.cursor.eat("`");
        Ok(())
    }

    /// `[label](target)` or `![label](target)`. When the syntax does not hold
    /// the opening character is kept as text.
    fn link(&mut self) {
        let rest = self.cursor.rest();
        let body = rest.strip_prefix('!').unwrap_or(rest);
        match parse_link(&body[1..]) {
            Some((label, target, len)) => {
                self.cursor.eat(&rest[..rest.len() - body.len() + 1 + len]);
                self.flush();
                if target == MAN_REFERENCE_TARGET {
                    self.emit(Event::ManReference(label.to_string()));
                } else {
                    self.emit(Event::Hyperlink(Link::new(label, target)));
                }
            }
            None => {
                if let Some(c) = self.cursor.bump() {
                    self.pending.push(c);
                }
            }
        }
    }

    fn finish(&mut self) {
        self.flush();
        if self.in_code {
            warn!("code block not closed before end of input");
            self.in_code = false;
            self.emit(Event::CodeBlockClose);
        }
        while !self.lists.is_empty() {
            self.close_list();
        }
    }
}

/// Parse `label](target)` (the text after the opening bracket). Returns the
/// label, the target and the number of bytes the construct spans.
fn parse_link(s: &str) -> Option<(&str, &str, usize)> {
    let close = s.find(']')?;
    let label = &s[..close];
    let after = s[close + 1..].strip_prefix('(')?;
    let end = after.find(')')?;
    let target = &after[..end];
    if label.contains('\n') || target.contains('\n') {
        return None;
    }
    Some((label, target, close + 2 + end + 1))
}

/// A setext underline: three or more of the same `=`, `-` or `*`.
fn is_rule(line: &str) -> bool {
    let line = line.trim_end_matches(is_space);
    match line.chars().next() {
        Some(first @ ('=' | '-' | '*')) => line.len() >= 3 && line.chars().all(|c| c == first),
        _ => false,
    }
}
