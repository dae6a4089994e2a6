//! Direct evaluation of the expression AST

use crate::parser::{BinaryOp, Expr, UnaryOp};

/// Runtime value of a (sub-)expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Numeric value
    Number(f64),
    /// Result of a comparison or logical negation
    Bool(bool),
}

impl Value {
    /// Numeric view: `true` is 1, `false` is 0
    #[inline]
    #[must_use]
    pub fn as_number(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Bool(b) => f64::from(u8::from(b)),
        }
    }

    /// Truthiness: 0 and NaN are false, every other number is true
    #[inline]
    #[must_use]
    pub fn truthy(self) -> bool {
        match self {
            Self::Number(n) => n != 0.0 && !n.is_nan(),
            Self::Bool(b) => b,
        }
    }
}

impl Expr {
    /// Evaluate the expression
    ///
    /// Arithmetic follows IEEE-754 (division by zero yields an infinity,
    /// comparisons with NaN are false). `&&` and `||` short-circuit and return
    /// the deciding operand rather than a boolean.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn eval(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(*n),
            Self::Unary { op, operand } => {
                let value = operand.eval();
                match op {
                    UnaryOp::Not => Value::Bool(!value.truthy()),
                    UnaryOp::Neg => Value::Number(-value.as_number()),
                    UnaryOp::Plus => Value::Number(value.as_number()),
                }
            }
            Self::Binary { op, lhs, rhs } => {
                let left = lhs.eval();
                match op {
                    BinaryOp::And => {
                        if left.truthy() {
                            rhs.eval()
                        } else {
                            left
                        }
                    }
                    BinaryOp::Or => {
                        if left.truthy() {
                            left
                        } else {
                            rhs.eval()
                        }
                    }
                    _ => binary(*op, left, rhs.eval()),
                }
            }
        }
    }
}

#[allow(clippy::float_cmp)]
fn binary(op: BinaryOp, left: Value, right: Value) -> Value {
    let (a, b) = (left.as_number(), right.as_number());
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::Le => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::Ge => Value::Bool(a >= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
        BinaryOp::StrictEq => Value::Bool(strict_eq(left, right)),
        BinaryOp::StrictNotEq => Value::Bool(!strict_eq(left, right)),
        BinaryOp::And | BinaryOp::Or => {
            unreachable!("short-circuit operators handled by Expr::eval")
        }
    }
}

#[allow(clippy::float_cmp)]
fn strict_eq(left: Value, right: Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}
