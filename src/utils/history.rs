// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::ResultSet;
use crate::domain::scrape::error::ScrapeError;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;
use tracing::warn;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One past query and the result set it produced. Owned exclusively by the
/// ring; eviction drops the entry.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub query: String,
    pub results: ResultSet,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(query: String, results: ResultSet) -> Self {
        Self {
            query,
            results,
            recorded_at: Utc::now(),
        }
    }
}

/// Fixed-capacity, insertion-ordered log of past query result sets. When a
/// new entry would exceed the capacity the oldest is evicted first; both
/// ends are O(1) on the backing `VecDeque`.
#[derive(Debug)]
pub struct HistoryRing {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryRing {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
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

    /// The nth most recent entry, 1-based from the newest. An index below 1
    /// is malformed input; an index beyond the current size is merely absent.
    pub fn nth_most_recent(&self, n: i64) -> Result<Option<&HistoryEntry>, ScrapeError> {
        if n < 1 {
            return Err(ScrapeError::InvalidRequest(format!(
                "history index must be at least 1, got {n}"
            )));
        }
        let n = n as usize;
        if n > self.entries.len() {
            warn!(
                requested = n,
                size = self.entries.len(),
                "history index exceeds current history size"
            );
            return Ok(None);
        }
        Ok(self.entries.iter().rev().nth(n - 1))
    }
}

impl fmt::Display for HistoryRing {
    /// Newest-first dump; each entry is annotated with its 0-based distance
    /// from the newest.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recent history size: {}", self.entries.len())?;
        for (position, entry) in self.entries.iter().rev().enumerate() {
            writeln!(
                f,
                "{position}: [{}] {}\n{}",
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                entry.query,
                entry.results
            )?;
        }
        Ok(())
    }
}
