//! Operand and result values

mod display;
mod impls;

use serde::{Deserialize, Serialize};

/// A calculator operand or result.
///
/// Callers may hand the calculator anything they can convert into a
/// `Value`, including text. Text is carried as-is so that an operation
/// can reject it with a typed error instead of guessing at a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Non-numeric text
    Text(String),
}
