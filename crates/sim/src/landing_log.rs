use std::collections::VecDeque;
use std::fmt;

/// One timestamped line in the landing log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Simulation time in seconds.
    pub at_secs: f64,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = (self.at_secs.max(0.0) * 1000.0).round() as u64;
        let (mins, rem) = (total_ms / 60_000, total_ms % 60_000);
        write!(f, "[{:02}:{:02}.{:03}] {}", mins, rem / 1000, rem % 1000, self.message)
    }
}

/// Bounded log; pushing past capacity evicts the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LandingLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    pub fn push(&mut self, at_secs: f64, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at_secs,
            message: message.into(),
        });
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
