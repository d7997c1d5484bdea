//! Plain-text formatting for terminals.

use std::fmt::Write;

/// Formats rows as left-aligned columns separated by two spaces.
///
/// CR and LF are stripped from cells. Every column except the last cell of
/// a row is padded to the widest cell of that column, measured in chars.
/// The result always ends with a newline.
pub fn tablify<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|col| col.as_ref().replace(['\r', '\n'], ""))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &table {
        for (i, col) in row.iter().enumerate() {
            let len = col.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut output = String::new();
    for (r, row) in table.iter().enumerate() {
        if r > 0 {
            output.push('\n');
        }
        for (i, col) in row.iter().enumerate() {
            if i > 0 {
                output.push_str("  ");
            }
            if i == row.len() - 1 {
                output.push_str(col);
            } else {
                let _ = write!(output, "{col:<width$}", width = widths[i]);
            }
        }
    }
    output.push('\n');
    output
}

/// Escapes control characters so `value` is safe to print on a terminal.
///
/// C0 controls except `\n`, DEL and C1 controls become `\xNN`.
pub fn term_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if is_unsafe_control(ch) {
            let _ = write!(escaped, "\\x{:02x}", ch as u32);
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

fn is_unsafe_control(ch: char) -> bool {
    matches!(ch, '\u{00}'..='\u{09}' | '\u{0b}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}
