//! Expression detection for text typed or pasted as a whole.
//!
//! Decides whether a string is something the keypad could have produced
//! and normalises the alternative operator glyphs before evaluation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings containing only keypad characters.
    /// Allows: digits, whitespace, dots, the four operators and `x`, `×`, `÷`.
    static ref KEYPAD_CHARS: Regex = Regex::new(r"^[\d\s\.\+\-\*/xX×÷]+$").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Check if input looks like a keypad expression.
///
/// Returns `true` if the input:
/// 1. Contains only keypad characters
/// 2. Has at least one digit
///
/// Whether it is well-formed is left to the evaluator.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() || !KEYPAD_CHARS.is_match(trimmed) {
        return false;
    }

    trimmed.chars().any(|c| c.is_ascii_digit())
}

/// Strip whitespace and map `x`, `×` and `÷` onto `*` and `/`.
///
/// Returns `None` if the input doesn't look like an expression.
pub fn normalize_expression(input: &str) -> Option<String> {
    if !looks_like_expression(input) {
        return None;
    }

    let compact = WHITESPACE.replace_all(input.trim(), "");
    Some(
        compact
            .chars()
            .map(|c| match c {
                'x' | 'X' | '×' => '*',
                '÷' => '/',
                c => c,
            })
            .collect(),
    )
}
