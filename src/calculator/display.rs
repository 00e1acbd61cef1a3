//! What the calculator shows: the expression line and the result line.

use serde::Serialize;

/// Contents of the result line.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultLine {
    /// Nothing evaluated since the last edit.
    #[default]
    Placeholder,
    /// A successful evaluation.
    Value {
        value: f64,
        /// Formatted for display.
        text: String,
    },
    /// The last evaluation failed.
    Error {
        /// Why it failed, for logs and `--json` output. The display shows the
        /// configured error text instead.
        reason: String,
    },
}

impl ResultLine {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The numeric value, only for successful results.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// A snapshot of both display lines, handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayState {
    /// The expression, or the placeholder when empty.
    pub expression: String,
    /// The result, the placeholder, or the error text.
    pub result: String,
    pub is_error: bool,
    /// Whether `result` comes from a completed evaluation still on screen.
    pub showing_result: bool,
    /// Failure reason when `is_error` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_line_accessors() {
        assert!(!ResultLine::Placeholder.is_error());
        assert_eq!(ResultLine::Placeholder.value(), None);

        let value = ResultLine::Value {
            value: 14.0,
            text: "14".to_string(),
        };
        assert_eq!(value.value(), Some(14.0));
        assert!(!value.is_error());

        let error = ResultLine::Error {
            reason: "can't divide by zero".to_string(),
        };
        assert!(error.is_error());
        assert_eq!(error.value(), None);
    }

    #[test]
    fn test_display_state_json() {
        let state = DisplayState {
            expression: "2+3*4".to_string(),
            result: "14".to_string(),
            is_error: false,
            showing_result: true,
            error_reason: None,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["expression"], "2+3*4");
        assert_eq!(json["result"], "14");
        assert_eq!(json["showing_result"], true);
        assert!(json.get("error_reason").is_none());
    }
}
