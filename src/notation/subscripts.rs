//! Conversion between `_digit` screw notation and Unicode subscript digits.
//!
//! `2_1` and `2₁` denote the same screw axis; symbols are rendered with true subscripts
//! and either spelling is accepted on input.

use crate::config::SUBSCRIPT_OFFSET;

/// Subscript form of an ASCII digit (`'1'` → `'₁'`).
pub fn digit_to_subscript(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        char::from_u32(c as u32 + SUBSCRIPT_OFFSET)
    } else {
        None
    }
}

/// ASCII digit of a subscript digit (`'₁'` → `'1'`).
pub fn subscript_to_digit(c: char) -> Option<char> {
    if ('\u{2080}'..='\u{2089}').contains(&c) {
        char::from_u32(c as u32 - SUBSCRIPT_OFFSET)
    } else {
        None
    }
}

/// Replace every `_` followed by a decimal digit with the subscript digit.
///
/// Everything else passes through unchanged, so the function is idempotent on
/// strings that already use subscripts.
pub fn to_subscript(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(sub) = chars.peek().copied().and_then(digit_to_subscript) {
                out.push(sub);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Replace every subscript digit with `_` and the ASCII digit.
pub fn to_underscore(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match subscript_to_digit(c) {
            Some(digit) => {
                out.push('_');
                out.push(digit);
            }
            None => out.push(c),
        }
    }
    out
}

/// Decimal digits of `n` as a subscript string (`21` → `"₂₁"`).
pub fn digits_to_subscript(n: u32) -> String {
    n.to_string().chars().filter_map(digit_to_subscript).collect()
}
