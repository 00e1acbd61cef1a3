//! Keypad tokens.
//!
//! Maps characters and key names typed by the user to the buttons of the
//! calculator.

use super::operator::Operator;
use thiserror::Error;

/// One button press on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Backspace,
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown key {key:?} at position {position}")]
    UnknownKey { key: String, position: usize },
}

impl KeyInput {
    /// Map a single character to a key.
    ///
    /// Besides the expression characters this accepts `x`/`×` for multiply,
    /// `÷` for divide, `=` for equals, `<` for backspace and `c` for reset.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            return Some(Self::Digit(c));
        }

        match c {
            '.' => Some(Self::DecimalPoint),
            'x' | 'X' | '×' => Some(Self::Operator(Operator::Multiply)),
            '÷' => Some(Self::Operator(Operator::Divide)),
            '=' => Some(Self::Equals),
            '<' => Some(Self::Backspace),
            'c' | 'C' => Some(Self::Reset),
            c => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// Map a key name (`back`, `reset`, `equals`, ...) or a single key character.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "back" | "backspace" | "del" => Some(Self::Backspace),
            "reset" | "clear" => Some(Self::Reset),
            "equals" | "eq" => Some(Self::Equals),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Parse a line of key presses, one key per character, whitespace ignored.
pub fn parse_keys(line: &str) -> Result<Vec<KeyInput>, InputError> {
    line.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| {
            KeyInput::from_char(c).ok_or_else(|| InputError::UnknownKey {
                key: c.to_string(),
                position,
            })
        })
        .collect()
}
