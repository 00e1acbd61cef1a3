//! Calculator module for keypad-driven arithmetic.
//!
//! This module provides functionality to:
//! - Build an expression one key press at a time
//! - Evaluate it with `*` and `/` before `+` and `-`
//! - Detect and normalise expressions typed as a whole
//! - Copy results to the clipboard

mod buffer;
mod clipboard;
mod controller;
mod detection;
mod display;
mod evaluation;
mod input;
mod operator;

pub use buffer::ExpressionBuffer;
pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use controller::Calculator;
pub use detection::{looks_like_expression, normalize_expression};
pub use display::{DisplayState, ResultLine};
pub use evaluation::{EvalError, ParsedTerms, evaluate, format_result, parse_terms};
pub use input::{InputError, KeyInput, parse_keys};
pub use operator::{Operator, is_operator, last_segment};
