//! Operation history log

/// Ordered, append-only log of operation descriptions.
///
/// Entries come out in the order they were pushed. With a capacity set,
/// the oldest entries are dropped to make room for new ones.
///
/// # Example
///
/// ```
/// use tally::History;
///
/// let mut history = History::new();
/// history.push("first");
/// history.push("second");
/// history.push("third");
///
/// assert_eq!(history.recent(Some(2)), ["second", "third"]);
/// assert_eq!(history.render(None), "first\nsecond\nthird");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<String>,
    capacity: Option<usize>,
}

impl History {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `capacity` entries when set.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        if let Some(cap) = self.capacity {
            if self.entries.len() > cap {
                let excess = self.entries.len() - cap;
                self.entries.drain(..excess);
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Configured capacity, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// The most recent `limit` entries in original order, or all of them
    /// when `limit` is `None` or exceeds the length.
    pub fn recent(&self, limit: Option<usize>) -> &[String] {
        match limit {
            Some(n) => &self.entries[self.entries.len().saturating_sub(n)..],
            None => &self.entries,
        }
    }

    /// Entries selected by [`History::recent`], joined with newlines.
    pub fn render(&self, limit: Option<usize>) -> String {
        self.recent(limit).join("\n")
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_zero_is_empty() {
        let mut history = History::new();
        history.push("a");
        assert!(history.recent(Some(0)).is_empty());
        assert_eq!(history.render(Some(0)), "");
    }

    #[test]
    fn test_recent_larger_than_len() {
        let mut history = History::new();
        history.push("a");
        history.push("b");
        assert_eq!(history.recent(Some(10)), ["a", "b"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(Some(2));
        history.push("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.entries(), ["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::with_capacity(Some(0));
        history.push("a");
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push("a");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.render(None), "");
    }
}
