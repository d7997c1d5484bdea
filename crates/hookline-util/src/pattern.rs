//! Regular expression helpers.

use regex::{Captures, Regex};

/// Backslash-escapes the characters `. * + ? ^ $ { } ( ) | [ ] \`.
///
/// Unlike [`regex::escape`] this touches nothing else, so the output is also
/// usable in other regex dialects.
pub fn escape_regexp(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(
            ch,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A haystack plus the position the next sticky match must start at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyCursor<'h> {
    /// Text being scanned.
    pub value: &'h str,
    /// Byte offset of the next match.
    pub offset: usize,
}

impl<'h> StickyCursor<'h> {
    /// Creates a cursor at the start of `value`.
    pub fn new(value: &'h str) -> Self {
        Self { value, offset: 0 }
    }

    /// Returns whether the cursor has consumed the whole haystack.
    pub fn is_done(&self) -> bool {
        self.offset >= self.value.len()
    }
}

/// Matches `regex` exactly at `cursor.offset`.
///
/// On success the cursor advances to the end of the match. A match that
/// would start later than the offset counts as no match and leaves the
/// cursor where it was.
pub fn sticky_match<'h>(cursor: &mut StickyCursor<'h>, regex: &Regex) -> Option<Captures<'h>> {
    if cursor.offset > cursor.value.len() {
        return None;
    }

    let caps = regex.captures_at(cursor.value, cursor.offset)?;
    let whole = caps.get(0)?;
    if whole.start() != cursor.offset {
        return None;
    }

    cursor.offset = whole.end();
    Some(caps)
}
