//! Calculation history abstraction
//!
//! The engine itself is stateless; any record of past results is owned by
//! the presentation layer and injected through this trait. The in-memory
//! implementation is the only one shipped: results live for the duration
//! of one run and are discarded.

use crate::core::models::CalculationResult;

/// One recorded calculation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Student the calculation was run for, when known
    pub student: Option<String>,
    /// The computed result
    pub result: CalculationResult,
}

/// Repository of past calculation results
pub trait HistoryStore {
    /// Record one calculation
    fn record(&mut self, entry: HistoryEntry);

    /// All recorded entries, oldest first
    fn entries(&self) -> &[HistoryEntry];

    /// Number of recorded entries
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the store is empty
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Request-scoped in-memory history
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistory {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl HistoryStore for InMemoryHistory {
    fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
