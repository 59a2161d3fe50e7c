//! Comment stripping for C/C++ source text.
//!
//! Removes `//` line comments and `/* */` block comments while passing
//! string (`"..."`) and character (`'...'`) literals through untouched, so
//! a literal like `"http://x"` survives and the matcher never sees comment
//! text that happens to look like an enum.

/// Strip all comments from `text`.
///
/// - Line comments become a single space; the terminating newline is kept.
/// - Block comments become a single space followed by the newlines they
///   contained, so later text keeps its line numbers.
/// - An unterminated block comment runs to end of input.
/// - Literals are copied byte-for-byte. A quote with no closing partner is
///   an ordinary character, not the start of a literal.
pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len);
    // Start of the pending run of text that is copied through unchanged.
    let mut copied = 0;
    let mut i = 0;

    // All delimiters are ASCII, so every index we slice at is a char boundary.
    while i < len {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                out.push_str(&text[copied..i]);
                out.push(' ');
                let end = text[i..].find('\n').map_or(len, |p| i + p);
                i = end;
                copied = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                out.push_str(&text[copied..i]);
                out.push(' ');
                let end = text[i + 2..].find("*/").map_or(len, |p| i + 2 + p + 2);
                out.extend(text[i..end].chars().filter(|&c| c == '\n'));
                i = end;
                copied = end;
            }
            quote @ (b'"' | b'\'') => {
                i = literal_end(bytes, i, quote).unwrap_or(i + 1);
            }
            _ => i += 1,
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Index just past the quote closing the literal opened at `start`, or
/// `None` when the literal is never closed.
fn literal_end(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
