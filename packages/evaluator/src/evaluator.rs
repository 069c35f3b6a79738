//! # Expression evaluation
//!
//! Expressions are interpreted directly over the AST; there is no
//! compilation step and no host-language `eval`.
//!
//! ## Typing
//!
//! Every value is either a string or a number. An operand counts as a string
//! when its runtime value is a string, which covers string literals, symbols
//! bound to strings and unresolved symbols (they read as `""`).
//!
//! - `+` adds two numbers and concatenates as soon as either side is a string
//! - `-`, `*` and `/` only accept numbers
//!
//! ## Symbols
//!
//! A symbol is looked up in the innermost binding frame only. A missing
//! binding is not an error: it reads as the empty string.

use crate::context::BindingContext;
use simpleui_ast::{Expression, Operator};
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid operation: ({} {operator} {})", .left.to_literal(), .right.to_literal())]
    InvalidOperation {
        left: Value,
        operator: Operator,
        right: Value,
    },

    #[error("Unhandled expression type: {kind}")]
    UnhandledExpression { kind: String },

    #[error("Component '{name}' not found")]
    ComponentNotFound { name: String },

    #[error("Recursive component detected: {component}\nCall stack: {}", .call_stack.join(" → "))]
    RecursiveComponent {
        component: String,
        call_stack: Vec<String>,
    },
}

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
}

impl Value {
    /// Value of an unresolved symbol or a missing argument
    pub fn empty() -> Self {
        Value::String(String::new())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Source-like rendering used in diagnostics: strings quoted, numbers bare
    pub fn to_literal(&self) -> String {
        match self {
            Value::String(s) => format!("'{}'", s),
            Value::Number(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Value::Number(n) if *n == 0.0 => f.write_str("0"),
            Value::Number(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
                // Exponent form past these magnitudes, with an explicit sign: 1e+21, 1e-7
                let text = format!("{:e}", n);
                match text.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exponent)
                    }
                    _ => f.write_str(&text),
                }
            }
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// Evaluate an expression against the innermost binding frame
pub fn evaluate(expr: &Expression, ctx: &BindingContext) -> EvalResult<Value> {
    match expr {
        Expression::StringLiteral { value } => Ok(Value::String(value.clone())),

        Expression::NumberLiteral { value } => Ok(Value::Number(*value)),

        Expression::SymbolReference { symbol } => match ctx.lookup(symbol) {
            Some(value) => Ok(value.clone()),
            None => {
                debug!(symbol = %symbol, depth = ctx.depth(), "Unresolved symbol - using empty string");
                Ok(Value::empty())
            }
        },

        Expression::Operation {
            left,
            operator,
            right,
        } => {
            let left_val = evaluate(left, ctx)?;
            let right_val = evaluate(right, ctx)?;
            apply_operator(*operator, left_val, right_val)
        }

        Expression::Unrecognized { kind } => Err(EvalError::UnhandledExpression { kind: kind.clone() }),
    }
}

fn apply_operator(operator: Operator, left: Value, right: Value) -> EvalResult<Value> {
    match (operator, left, right) {
        (Operator::Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Operator::Add, left, right) => Ok(Value::String(format!("{}{}", left, right))),
        (Operator::Subtract, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        (Operator::Multiply, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (Operator::Divide, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
        (operator, left, right) => Err(EvalError::InvalidOperation {
            left,
            operator,
            right,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_number_display_exponent_form() {
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Number(-1.5e22).to_string(), "-1.5e+22");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::Number(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn test_literal_rendering() {
        assert_eq!(Value::from("a").to_literal(), "'a'");
        assert_eq!(Value::from(3.0).to_literal(), "3");
    }

    #[test]
    fn test_invalid_operation_message() {
        let err = EvalError::InvalidOperation {
            left: Value::from("a"),
            operator: Operator::Multiply,
            right: Value::from(2.0),
        };
        assert_eq!(err.to_string(), "Invalid operation: ('a' * 2)");
    }
}
