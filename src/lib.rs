//! Keypad-driven arithmetic calculator engine.
//!
//! The [`calculator`] module holds the expression buffer, the two-tier
//! evaluator and the [`Calculator`](calculator::Calculator) controller a
//! presentation layer talks to.

pub mod calculator;
pub mod config;

pub use calculator::{Calculator, EvalError, KeyInput, evaluate};
pub use config::Config;
