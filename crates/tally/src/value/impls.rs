//! Value constructors, predicates, extractors and From conversions

use super::Value;

impl Value {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a float
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if value is numeric (integer or float)
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if value is numerically zero (`0`, `0.0` or `-0.0`)
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Text(_) => false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════
    /// Extract as i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as f64, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// Extract as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret a token the way a person typing at a prompt means it:
    /// integer first, then float, otherwise text.
    pub fn parse_lenient(token: &str) -> Self {
        let token = token.trim();
        if let Ok(n) = token.parse::<i64>() {
            Value::Int(n)
        } else if let Ok(f) = token.parse::<f64>() {
            Value::Float(f)
        } else {
            Value::text(token)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From conversions
// ═══════════════════════════════════════════════════════════════════

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Value::parse_lenient("10"), Value::Int(10));
        assert_eq!(Value::parse_lenient(" -3 "), Value::Int(-3));
        assert_eq!(Value::parse_lenient("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse_lenient("a"), Value::text("a"));
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::Int(0).is_zero());
        assert!(Value::Float(-0.0).is_zero());
        assert!(!Value::text("0").is_zero());
    }
}
