//! Quoted literal rendering shared by the pattern matcher and the report.
//!
//! Both follow the same rules: single quotes unless the text contains a
//! single quote and no double quote, backslash escapes for `\\`, `\t`, `\n`,
//! `\r` and the chosen quote, and `\xNN` for other control characters.

/// Quote character for text with the given quote content.
pub fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

pub fn push_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => push_hex_escape(out, c as u32),
        c => out.push(c),
    }
}

pub fn push_hex_escape(out: &mut String, code: u32) {
    if code <= 0xff {
        out.push_str(&format!("\\x{:02x}", code));
    } else {
        out.push_str(&format!("\\u{:04x}", code));
    }
}

/// `text` wrapped in quotes with every character escaped.
pub fn quoted(text: &str) -> String {
    let quote = pick_quote(text.contains('\''), text.contains('"'));
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        push_escaped(&mut out, c, quote);
    }
    out.push(quote);
    out
}
