//! Expression evaluation.
//!
//! Splits a keypad expression into operands and operators, then reduces it
//! in two left-to-right passes: `*` and `/` first, then `+` and `-`.

use super::operator::Operator;
use thiserror::Error;
use tracing::debug;

/// Why an expression could not be evaluated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// A numeric segment is not a valid literal (e.g. `1.2.3`).
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),
    /// Operand and operator counts don't line up (empty, leading or trailing operator).
    #[error("malformed expression: {operands} operand(s) for {operators} operator(s)")]
    MalformedExpression { operands: usize, operators: usize },
    #[error("can't divide by zero")]
    DivisionByZero,
    /// A character that is neither part of a number nor an operator.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
    /// The result does not fit in a finite `f64`.
    #[error("result out of range")]
    Overflow,
}

/// Operands and operators of an expression, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedTerms {
    pub operands: Vec<f64>,
    pub operators: Vec<Operator>,
}

impl ParsedTerms {
    /// Whether there is exactly one more operand than operators.
    pub fn is_well_formed(&self) -> bool {
        self.operators.len() + 1 == self.operands.len()
    }
}

/// Split an expression into operands and operators.
///
/// An operator with no number in front of it is recorded without an operand,
/// so the count mismatch is left for [`evaluate`] to report. Whitespace is
/// skipped everywhere, including inside a number: `"1 2"` parses as `12`.
pub fn parse_terms(expr: &str) -> Result<ParsedTerms, EvalError> {
    let mut terms = ParsedTerms::default();
    let mut segment = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            segment.push(c);
        } else if let Some(op) = Operator::from_char(c) {
            if !segment.is_empty() {
                terms.operands.push(parse_number(&segment)?);
                segment.clear();
            }
            terms.operators.push(op);
        } else if !c.is_whitespace() {
            return Err(EvalError::UnknownOperator(c));
        }
    }

    if !segment.is_empty() {
        terms.operands.push(parse_number(&segment)?);
    }

    Ok(terms)
}

fn parse_number(segment: &str) -> Result<f64, EvalError> {
    segment
        .parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber(segment.to_string()))
}

/// Evaluate an expression, multiplication and division before addition and subtraction.
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let terms = parse_terms(expr)?;

    if !terms.is_well_formed() {
        return Err(EvalError::MalformedExpression {
            operands: terms.operands.len(),
            operators: terms.operators.len(),
        });
    }

    let ParsedTerms {
        mut operands,
        mut operators,
    } = terms;

    reduce(&mut operands, &mut operators, Operator::is_multiplicative)?;
    reduce(&mut operands, &mut operators, Operator::is_additive)?;

    debug!(expr, result = operands[0], "evaluated expression");

    match operands[0] {
        value if value.is_finite() => Ok(value),
        _ => Err(EvalError::Overflow),
    }
}

/// Collapse every operator selected by `tier`, left to right.
///
/// Both slices shrink as pairs are combined, so the scan stays on the same
/// index after a collapse.
fn reduce(
    operands: &mut Vec<f64>,
    operators: &mut Vec<Operator>,
    tier: fn(Operator) -> bool,
) -> Result<(), EvalError> {
    let mut i = 0;
    while i < operators.len() {
        let op = operators[i];
        if !tier(op) {
            i += 1;
            continue;
        }

        let value = op.apply(operands[i], operands[i + 1])?;
        if !value.is_finite() {
            return Err(EvalError::Overflow);
        }
        operands[i] = value;
        operands.remove(i + 1);
        operators.remove(i);
    }
    Ok(())
}

/// Format a result for display.
///
/// Integral values print without a fractional part; anything else is rounded
/// to `max_decimals` places with trailing zeros dropped.
pub fn format_result(value: f64, max_decimals: usize) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // The integer cast also folds -0 into 0.
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.*}", max_decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
