//! Error types for tally operations

use thiserror::Error;

use crate::Value;

/// Main error type for calculator and rectangle operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    /// Operand types the operation cannot combine
    #[error("Invalid operands for {op}: {left_type} and {right_type}")]
    InvalidOperands {
        /// Operator symbol
        op: &'static str,
        /// Type of the left operand
        left_type: &'static str,
        /// Type of the right operand
        right_type: &'static str,
    },

    /// Divisor was zero
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// Integer result does not fit in 64 bits
    #[error("Integer overflow in {op}")]
    IntegerOverflow {
        /// Operator symbol
        op: &'static str,
    },

    /// Rectangle dimensions were not strictly positive
    #[error("Length and width must be positive values.")]
    InvalidDimensions {
        /// Rejected length
        length: f64,
        /// Rejected width
        width: f64,
    },
}

/// Result type alias for tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

/// Short type name of a value, for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Text(_) => "str",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TallyError::InvalidOperands {
            op: "*",
            left_type: "int",
            right_type: "str",
        };
        assert_eq!(err.to_string(), "Invalid operands for *: int and str");
        assert_eq!(
            TallyError::DivisionByZero.to_string(),
            "Division by zero is not allowed."
        );
    }
}
