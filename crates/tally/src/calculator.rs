//! Arithmetic calculator with an operation history log

use tracing::{debug, warn};

use crate::error::{Result, TallyError};
use crate::history::History;
use crate::ops;
use crate::{CalcContext, Value};

/// Confirmation returned by [`Calculator::reset_history`].
pub const HISTORY_CLEARED: &str = "History cleared.";

/// Arithmetic calculator that records every operation it is asked to do.
///
/// Each call appends one human-readable line to the history, whether it
/// succeeded or failed. The one exception is [`Calculator::subtract`],
/// which performs no validation of its own: if the operands cannot be
/// subtracted, the error propagates before anything is recorded.
///
/// # Example
///
/// ```
/// use tally::{Calculator, TallyError, Value};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.add(10, 5).unwrap(), Value::Int(15));
/// assert_eq!(calc.divide(10, 0), Err(TallyError::DivisionByZero));
///
/// assert_eq!(
///     calc.get_history(None),
///     "Added 10 and 5, result: 15\nError: Division by zero attempted."
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: History,
    ctx: CalcContext,
}

impl Calculator {
    /// Create a calculator with default settings and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given configuration.
    pub fn with_context(ctx: CalcContext) -> Self {
        Self {
            history: History::with_capacity(ctx.history_capacity),
            ctx,
        }
    }

    /// The calculator's configuration.
    pub fn context(&self) -> &CalcContext {
        &self.ctx
    }

    /// The history log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Add two values.
    pub fn add(&mut self, x: impl Into<Value>, y: impl Into<Value>) -> Result<Value> {
        let (x, y) = (x.into(), y.into());
        match ops::add(&x, &y) {
            Ok(result) => {
                self.computed("add", &x, &y, &result);
                self.history
                    .push(format!("Added {} and {}, result: {}", x, y, result));
                Ok(result)
            }
            Err(err) => Err(self.failed("add", "Error in add operation.", err)),
        }
    }

    /// Subtract `y` from `x`.
    pub fn subtract(&mut self, x: impl Into<Value>, y: impl Into<Value>) -> Result<Value> {
        let (x, y) = (x.into(), y.into());
        let result = ops::sub(&x, &y)?;
        self.computed("subtract", &x, &y, &result);
        self.history
            .push(format!("Subtracted {} and {}, result: {}", x, y, result));
        Ok(result)
    }

    /// Multiply two numbers. Both operands must be numeric.
    pub fn multiply(&mut self, x: impl Into<Value>, y: impl Into<Value>) -> Result<Value> {
        let (x, y) = (x.into(), y.into());
        if !x.is_numeric() || !y.is_numeric() {
            let err = ops::invalid_operands("*", &x, &y);
            return Err(self.failed(
                "multiply",
                "Error: Invalid types for multiplication.",
                err,
            ));
        }

        match ops::mul(&x, &y) {
            Ok(result) => {
                self.computed("multiply", &x, &y, &result);
                self.history
                    .push(format!("Multiplied {} and {}, result: {}", x, y, result));
                Ok(result)
            }
            Err(err) => Err(self.failed("multiply", "Error in multiply operation.", err)),
        }
    }

    /// Divide `x` by `y`. The quotient is always a float.
    pub fn divide(&mut self, x: impl Into<Value>, y: impl Into<Value>) -> Result<Value> {
        let (x, y) = (x.into(), y.into());
        match ops::div(&x, &y) {
            Ok(result) => {
                self.computed("divide", &x, &y, &result);
                self.history
                    .push(format!("Divided {} by {}, result: {}", x, y, result));
                Ok(result)
            }
            Err(err) => {
                let entry = match err {
                    TallyError::DivisionByZero => "Error: Division by zero attempted.",
                    TallyError::InvalidOperands { .. } => "Error: Invalid types for division.",
                    _ => "Error in divide operation.",
                };
                Err(self.failed("divide", entry, err))
            }
        }
    }

    /// History entries joined with newlines; only the most recent `limit`
    /// entries when a limit is given.
    pub fn get_history(&self, limit: Option<usize>) -> String {
        self.history.render(limit)
    }

    /// Clear the history log.
    pub fn reset_history(&mut self) -> &'static str {
        debug!(entries = self.history.len(), "history cleared");
        self.history.clear();
        HISTORY_CLEARED
    }

    fn computed(&self, op: &str, x: &Value, y: &Value, result: &Value) {
        if self.ctx.trace {
            debug!(op, %x, %y, %result, "operation computed");
        }
    }

    fn failed(&mut self, op: &str, entry: &str, err: TallyError) -> TallyError {
        warn!(op, error = %err, "operation failed");
        self.history.push(entry);
        err
    }
}
