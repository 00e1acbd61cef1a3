//! The in-progress expression typed on the keypad.

use super::operator::{Operator, is_operator, last_segment};
use tracing::debug;

/// Holds the expression being typed and keeps it well-formed while editing.
///
/// Edits never fail: anything that would break the expression (a second
/// operator in a row, a second point in one number) is collapsed or ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    expression: String,
    showing_result: bool,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit, starting a fresh expression if a result is shown.
    ///
    /// Anything other than an ASCII digit is ignored.
    pub fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            debug!(?digit, "ignoring non-digit");
            return;
        }
        self.start_fresh_if_showing_result();
        self.expression.push(digit);
    }

    /// Append a decimal point, unless the last number typed already has one.
    ///
    /// The last number is the last non-empty segment, so right after an
    /// operator the check still applies to the number before it. A number
    /// that would start with a bare point gets a leading `0`.
    pub fn push_decimal_point(&mut self) {
        self.start_fresh_if_showing_result();

        if last_segment(&self.expression).contains('.') {
            return;
        }

        if self.expression.is_empty() || self.ends_with_operator() {
            self.expression.push_str("0.");
        } else {
            self.expression.push('.');
        }
    }

    /// Append an operator, replacing a trailing one.
    ///
    /// Does nothing on an empty expression.
    pub fn push_operator(&mut self, op: Operator) {
        if self.expression.is_empty() {
            return;
        }

        if self.ends_with_operator() {
            self.expression.pop();
        }

        self.expression.push(op.as_char());
        self.showing_result = false;
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    pub fn reset(&mut self) {
        self.expression.clear();
        self.showing_result = false;
    }

    /// Text for the expression line: the expression, or `placeholder` when empty.
    pub fn text_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.expression.is_empty() {
            placeholder
        } else {
            &self.expression
        }
    }

    /// The raw expression, empty when nothing has been typed.
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    pub fn is_showing_result(&self) -> bool {
        self.showing_result
    }

    /// Record that the current expression has been evaluated and its result is shown.
    pub fn mark_showing_result(&mut self) {
        self.showing_result = true;
    }

    fn ends_with_operator(&self) -> bool {
        self.expression.ends_with(is_operator)
    }

    fn start_fresh_if_showing_result(&mut self) {
        if self.showing_result {
            debug!(previous = %self.expression, "starting a new expression");
            self.expression.clear();
            self.showing_result = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> ExpressionBuffer {
        let mut buffer = ExpressionBuffer::new();
        for c in keys.chars() {
            match c {
                '.' => buffer.push_decimal_point(),
                '<' => buffer.backspace(),
                c if c.is_ascii_digit() => buffer.push_digit(c),
                c => buffer.push_operator(Operator::from_char(c).unwrap()),
            }
        }
        buffer
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let buffer = ExpressionBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text_or("0"), "0");
        assert_eq!(buffer.as_str(), "");
    }

    #[test]
    fn test_digits_append_verbatim() {
        assert_eq!(typed("1207").text_or("0"), "1207");
        assert_eq!(typed("00").text_or("0"), "00");
    }

    #[test]
    fn test_operator_on_empty_is_noop() {
        assert_eq!(typed("+").as_str(), "");
        assert_eq!(typed("*-3").as_str(), "3");
    }

    #[test]
    fn test_operator_collapse() {
        assert_eq!(typed("5+*").as_str(), "5*");
        assert_eq!(typed("5+-/3").as_str(), "5/3");
        for first in ['+', '-', '*', '/'] {
            for second in ['+', '-', '*', '/'] {
                let both = typed(&format!("12{first}{second}"));
                let only_second = typed(&format!("12{second}"));
                assert_eq!(both, only_second);
            }
        }
    }

    #[test]
    fn test_decimal_point_inserts_leading_zero() {
        assert_eq!(typed(".").as_str(), "0.");
        assert_eq!(typed("3+.").as_str(), "3+0.");
        assert_eq!(typed("3.").as_str(), "3.");
    }

    #[test]
    fn test_decimal_point_once_per_segment() {
        assert_eq!(typed("1..").as_str(), "1.");
        assert_eq!(typed("1.5.2").as_str(), "1.52");
        assert_eq!(typed("..").as_str(), "0.");
        assert_eq!(typed("0.5.").as_str(), "0.5");
    }

    #[test]
    fn test_decimal_point_allowed_in_next_segment() {
        assert_eq!(typed("1.5+2.5").as_str(), "1.5+2.5");
        assert_eq!(typed("1+.").as_str(), "1+0.");
        assert_eq!(typed("1.5+0.5").as_str(), "1.5+0.5");
    }

    #[test]
    fn test_decimal_point_after_operator_checks_previous_number() {
        // Nothing typed after the operator yet, so the point is checked
        // against "1.5" and ignored.
        assert_eq!(typed("1.5+.").as_str(), "1.5+");
        assert_eq!(typed("1.5*-.").as_str(), "1.5-");
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut buffer = typed("5+");
        buffer.push_digit('+');
        buffer.push_digit('a');
        buffer.push_digit('.');
        assert_eq!(buffer.as_str(), "5+");
    }

    #[test]
    fn test_non_digit_keeps_result_flag() {
        let mut buffer = typed("2+3");
        buffer.mark_showing_result();
        buffer.push_digit('x');
        assert_eq!(buffer.as_str(), "2+3");
        assert!(buffer.is_showing_result());
    }

    #[test]
    fn test_backspace() {
        assert_eq!(typed("12+<").as_str(), "12");
        assert_eq!(typed("1<<<").as_str(), "");
        assert_eq!(typed("0.<").as_str(), "0");
    }

    #[test]
    fn test_backspace_then_point_checks_current_segment() {
        assert_eq!(typed("1.<.").as_str(), "1.");
    }

    #[test]
    fn test_reset() {
        let mut buffer = typed("2+3");
        buffer.mark_showing_result();
        buffer.reset();
        assert!(buffer.is_empty());
        assert!(!buffer.is_showing_result());
        assert_eq!(buffer.text_or("0"), "0");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut buffer = typed("2+3");
        buffer.mark_showing_result();
        buffer.push_digit('7');
        assert_eq!(buffer.as_str(), "7");
        assert!(!buffer.is_showing_result());
    }

    #[test]
    fn test_point_after_result_starts_fresh() {
        let mut buffer = typed("2.5");
        buffer.mark_showing_result();
        buffer.push_decimal_point();
        assert_eq!(buffer.as_str(), "0.");
    }

    #[test]
    fn test_operator_after_result_continues_expression() {
        let mut buffer = typed("2+3");
        buffer.mark_showing_result();
        buffer.push_operator(Operator::Multiply);
        assert_eq!(buffer.as_str(), "2+3*");
        assert!(!buffer.is_showing_result());
    }

    #[test]
    fn test_backspace_keeps_result_flag() {
        let mut buffer = typed("2+3");
        buffer.mark_showing_result();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "2+");
        assert!(buffer.is_showing_result());
    }
}
