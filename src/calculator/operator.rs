//! Operator classification shared by the buffer and the evaluator.

use super::evaluation::EvalError;

/// A binary operator available on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an expression character to an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The character this operator is written as in an expression.
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// `*` and `/`, reduced in the first pass.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// `+` and `-`, reduced in the second pass.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    /// Combine two operands.
    ///
    /// Division by zero (either sign) is an error rather than an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// Check if a character is one of the four expression operators.
pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// The last numeric segment of an expression.
///
/// Splits on operators and skips empty parts, so an expression ending in an
/// operator still yields the number before it. Empty only when the
/// expression has no digits or points at all.
pub fn last_segment(expr: &str) -> &str {
    expr.split(is_operator)
        .rfind(|part| !part.is_empty())
        .unwrap_or("")
}
