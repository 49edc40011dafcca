//! Calculator configuration

/// Configuration for a [`Calculator`](crate::Calculator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcContext {
    /// Maximum number of history entries kept (unbounded when `None`)
    pub history_capacity: Option<usize>,

    /// Whether to emit every computed operation as a debug event
    pub trace: bool,
}

impl CalcContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context whose history keeps at most `capacity` entries.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            history_capacity: Some(capacity),
            ..Default::default()
        }
    }

    /// Turn operation tracing on.
    pub fn traced(mut self) -> Self {
        self.trace = true;
        self
    }
}
