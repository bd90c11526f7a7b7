//! Whitespace normalization for running text.
//!
//! roff treats every input line as filled text, so the line we hand it should
//! not carry stray indentation or doubled blanks. A whitespace run survives as
//! a single space only when it touches an ASCII alphanumeric character on at
//! least one side; runs between two punctuation characters (e.g. between an
//! inline font escape and a parenthesis) are dropped entirely.
//!
//! Whitespace here is the C `isspace` set, so vertical tab and form feed count,
//! and no Unicode classification is attempted.

/// Matches C `isspace` in the "C" locale.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Squeeze a line of accumulated text.
///
/// Returns an empty string for all-whitespace input; callers must not emit a
/// line in that case.
pub fn squeeze(line: &str) -> String {
    let text = line.trim_start_matches(is_space);
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_space(c) {
            out.push(c);
            prev = Some(c);
            continue;
        }

        // Consume the rest of the run, remembering what follows it.
        while chars.next_if(|&next| is_space(next)).is_some() {}
        let after = chars.peek().copied();

        let touches_word = prev.is_some_and(|p| p.is_ascii_alphanumeric())
            || after.is_some_and(|a| a.is_ascii_alphanumeric());
        if touches_word {
            out.push(' ');
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}
