//! Identifier matching against the pattern argument.
//!
//! The pattern is rendered as a bytes literal (`b'id2'`) and an identifier
//! matches when it occurs *inside* that literal. The direction is inverted on
//! purpose: short ids such as `id`, `2` or even `b` match the pattern `id2`.

use crate::utils::literal::{pick_quote, push_escaped, push_hex_escape};

#[derive(Debug, Clone)]
pub struct PatternMatcher {
    literal: String,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            literal: bytes_literal(pattern.as_bytes()),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn matches(&self, id: &str) -> bool {
        self.literal.contains(id)
    }
}

/// Renders `bytes` as `b'...'`. Bytes outside ASCII are always `\xNN`.
fn bytes_literal(bytes: &[u8]) -> String {
    let quote = pick_quote(bytes.contains(&b'\''), bytes.contains(&b'"'));

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote);
    for &byte in bytes {
        if byte.is_ascii() {
            push_escaped(&mut out, byte as char, quote);
        } else {
            push_hex_escape(&mut out, u32::from(byte));
        }
    }
    out.push(quote);
    out
}
