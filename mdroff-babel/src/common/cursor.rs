//! Character cursor over an immutable source text.
//!
//! Positions are byte offsets into the source and always sit on a char
//! boundary. All look-ahead and look-behind used by the transducer goes through
//! here so the bounds checks live in one place.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Jump back to a position previously obtained from [`Cursor::pos`].
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(self.src.is_char_boundary(pos));
        self.pos = pos;
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` places ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The character just before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.src[..self.pos].chars().next_back()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advance past `pat` if the rest starts with it.
    pub fn eat(&mut self, pat: &str) -> bool {
        if self.starts_with(pat) {
            self.pos += pat.len();
            true
        } else {
            false
        }
    }

    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// The remainder of the current line, without its newline.
    pub fn line_rest(&self) -> &'a str {
        let rest = self.rest();
        match rest.find('\n') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Consume the remainder of the current line and its newline, returning the
    /// line without the newline.
    pub fn take_line(&mut self) -> &'a str {
        let line = self.line_rest();
        self.pos += line.len();
        self.eat("\n");
        line
    }

    /// The line following the current one, if any.
    pub fn next_line(&self) -> Option<&'a str> {
        let rest = self.rest();
        let start = rest.find('\n')? + 1;
        let next = &rest[start..];
        Some(next.split('\n').next().unwrap_or(next))
    }

    /// 1-based line and column of a byte position.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        let before = &self.src[..pos];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}
