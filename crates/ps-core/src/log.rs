//! Bounded history of rate summary lines.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Number of summary lines retained by the simulation state.
pub const RATE_LOG_CAPACITY: usize = 8;

/// Bounded, append-only log of rate summaries. The oldest line is dropped
/// once the capacity is exceeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for RateLog {
    fn default() -> Self {
        Self::new(RATE_LOG_CAPACITY)
    }
}

impl RateLog {
    /// Create an empty log holding at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a line, evicting from the front while over capacity.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Iterate lines from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Maximum number of retained lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Return `true` if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
