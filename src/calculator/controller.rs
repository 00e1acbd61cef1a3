//! The calculator driven by keypad events.
//!
//! Owns the expression buffer and the result line. The presentation layer
//! forwards each button press here and renders [`Calculator::display`].

use super::buffer::ExpressionBuffer;
use super::display::{DisplayState, ResultLine};
use super::evaluation::{EvalError, evaluate, format_result};
use super::input::KeyInput;
use super::operator::Operator;
use crate::config::Config;
use tracing::{debug, error};

/// Calculator state behind a keypad.
#[derive(Clone, Debug)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    result: ResultLine,
    placeholder: String,
    error_text: String,
    max_decimals: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Calculator {
    pub fn new(config: &Config) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            result: ResultLine::Placeholder,
            placeholder: config.placeholder.clone(),
            error_text: config.error_text.clone(),
            max_decimals: config.max_decimals,
        }
    }

    pub fn on_digit(&mut self, digit: char) {
        self.buffer.push_digit(digit);
        self.refresh();
    }

    pub fn on_decimal_point(&mut self) {
        self.buffer.push_decimal_point();
        self.refresh();
    }

    pub fn on_operator(&mut self, op: Operator) {
        self.buffer.push_operator(op);
        self.refresh();
    }

    pub fn on_backspace(&mut self) {
        self.buffer.backspace();
        self.refresh();
    }

    pub fn on_reset(&mut self) {
        self.buffer.reset();
        self.refresh();
    }

    /// Evaluate the current expression.
    ///
    /// Returns `None` without touching any state when the expression is empty.
    /// On failure the result line switches to the error text; the expression
    /// is kept so it can be corrected.
    pub fn on_equals(&mut self) -> Option<Result<f64, EvalError>> {
        if self.buffer.is_empty() {
            debug!("equals on empty expression ignored");
            return None;
        }

        let outcome = evaluate(self.buffer.as_str());
        match &outcome {
            Ok(value) => {
                self.result = ResultLine::Value {
                    value: *value,
                    text: format_result(*value, self.max_decimals),
                };
                self.buffer.mark_showing_result();
            }
            Err(e) => {
                error!(expression = self.buffer.as_str(), "error calculating: {e}");
                self.result = ResultLine::Error {
                    reason: e.to_string(),
                };
            }
        }
        Some(outcome)
    }

    /// Apply one key press. Returns the evaluation outcome for `=`.
    pub fn on_key(&mut self, key: KeyInput) -> Option<Result<f64, EvalError>> {
        debug!(?key, "key press");
        match key {
            KeyInput::Digit(d) => self.on_digit(d),
            KeyInput::DecimalPoint => self.on_decimal_point(),
            KeyInput::Operator(op) => self.on_operator(op),
            KeyInput::Backspace => self.on_backspace(),
            KeyInput::Reset => self.on_reset(),
            KeyInput::Equals => return self.on_equals(),
        }
        None
    }

    /// The expression line.
    pub fn current_display_text(&self) -> &str {
        self.buffer.text_or(&self.placeholder)
    }

    /// The result line: the last result, the error text, or the placeholder.
    pub fn result_display_text(&self) -> &str {
        match &self.result {
            ResultLine::Placeholder => &self.placeholder,
            ResultLine::Value { text, .. } => text,
            ResultLine::Error { .. } => &self.error_text,
        }
    }

    pub fn result(&self) -> &ResultLine {
        &self.result
    }

    pub fn display(&self) -> DisplayState {
        DisplayState {
            expression: self.current_display_text().to_string(),
            result: self.result_display_text().to_string(),
            is_error: self.result.is_error(),
            showing_result: self.buffer.is_showing_result(),
            error_reason: match &self.result {
                ResultLine::Error { reason } => Some(reason.clone()),
                _ => None,
            },
        }
    }

    /// After an edit the result line falls back to the placeholder, unless
    /// a finished result is still on screen.
    fn refresh(&mut self) {
        if !self.buffer.is_showing_result() {
            self.result = ResultLine::Placeholder;
        }
    }
}
