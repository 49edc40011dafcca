//! Arithmetic on values
//!
//! Integers use checked arithmetic. Mixing an integer with a float
//! promotes both sides to float.

use crate::error::{type_name, Result, TallyError};
use crate::Value;

/// Operands after numeric promotion.
enum Numeric {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn promote(op: &'static str, left: &Value, right: &Value) -> Result<Numeric> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Numeric::Ints(*a, *b)),
        (Value::Int(a), Value::Float(b)) => Ok(Numeric::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Ok(Numeric::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok(Numeric::Floats(*a, *b)),
        _ => Err(invalid_operands(op, left, right)),
    }
}

pub(crate) fn invalid_operands(op: &'static str, left: &Value, right: &Value) -> TallyError {
    TallyError::InvalidOperands {
        op,
        left_type: type_name(left),
        right_type: type_name(right),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

/// `left + right`. Two text values concatenate.
pub fn add(left: &Value, right: &Value) -> Result<Value> {
    if let (Value::Text(a), Value::Text(b)) = (left, right) {
        return Ok(Value::Text(format!("{}{}", a, b)));
    }

    match promote("+", left, right)? {
        Numeric::Ints(a, b) => a
            .checked_add(b)
            .map(Value::Int)
            .ok_or(TallyError::IntegerOverflow { op: "+" }),
        Numeric::Floats(a, b) => Ok(Value::Float(a + b)),
    }
}

/// `left - right`
pub fn sub(left: &Value, right: &Value) -> Result<Value> {
    match promote("-", left, right)? {
        Numeric::Ints(a, b) => a
            .checked_sub(b)
            .map(Value::Int)
            .ok_or(TallyError::IntegerOverflow { op: "-" }),
        Numeric::Floats(a, b) => Ok(Value::Float(a - b)),
    }
}

/// `left * right`
pub fn mul(left: &Value, right: &Value) -> Result<Value> {
    match promote("*", left, right)? {
        Numeric::Ints(a, b) => a
            .checked_mul(b)
            .map(Value::Int)
            .ok_or(TallyError::IntegerOverflow { op: "*" }),
        Numeric::Floats(a, b) => Ok(Value::Float(a * b)),
    }
}

/// True division: the result is always a float.
///
/// A zero divisor is reported before operand types are looked at.
pub fn div(left: &Value, right: &Value) -> Result<Value> {
    if right.is_zero() {
        return Err(TallyError::DivisionByZero);
    }

    match promote("/", left, right)? {
        Numeric::Ints(a, b) => Ok(Value::Float(a as f64 / b as f64)),
        Numeric::Floats(a, b) => Ok(Value::Float(a / b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_promotes_mixed() {
        assert_eq!(
            add(&Value::Int(10), &Value::Float(2.5)).unwrap(),
            Value::Float(12.5)
        );
    }

    #[test]
    fn test_add_concatenates_text() {
        assert_eq!(
            add(&Value::text("ab"), &Value::text("cd")).unwrap(),
            Value::text("abcd")
        );
    }

    #[test]
    fn test_add_text_and_int_fails() {
        let err = add(&Value::text("a"), &Value::Int(1)).unwrap_err();
        assert_eq!(
            err,
            TallyError::InvalidOperands {
                op: "+",
                left_type: "str",
                right_type: "int",
            }
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            add(&Value::Int(i64::MAX), &Value::Int(1)).unwrap_err(),
            TallyError::IntegerOverflow { op: "+" }
        );
        assert_eq!(
            sub(&Value::Int(i64::MIN), &Value::Int(1)).unwrap_err(),
            TallyError::IntegerOverflow { op: "-" }
        );
        assert_eq!(
            mul(&Value::Int(i64::MAX), &Value::Int(2)).unwrap_err(),
            TallyError::IntegerOverflow { op: "*" }
        );
    }

    #[test]
    fn test_div_is_true_division() {
        assert_eq!(div(&Value::Int(10), &Value::Int(4)).unwrap(), Value::Float(2.5));
    }

    #[test]
    fn test_div_zero_checked_before_types() {
        assert_eq!(
            div(&Value::text("a"), &Value::Int(0)).unwrap_err(),
            TallyError::DivisionByZero
        );
        assert_eq!(
            div(&Value::Int(1), &Value::Float(0.0)).unwrap_err(),
            TallyError::DivisionByZero
        );
    }
}
