//! # Snapshot History
//!
//! Bounded, linear undo/redo log of full state snapshots.
//!
//! ## Design
//!
//! - History always holds at least one snapshot (the seed)
//! - The cursor points at the snapshot matching the live state
//! - Recording truncates everything after the cursor, then appends
//! - Once the capacity is exceeded the oldest snapshots are dropped first
//! - Snapshots are owned copies: mutating the live state later never
//!   changes a recorded entry
//!
//! ## Example
//!
//! ```rust
//! use listskin_editor::History;
//!
//! let mut history = History::new(0);
//! history.record(&1);
//! history.record(&2);
//!
//! assert_eq!(history.undo(), Some(&1));
//! assert_eq!(history.redo(), Some(&2));
//! assert_eq!(history.redo(), None);
//! ```

use tracing::debug;

/// Maximum number of snapshots kept by default
pub const HISTORY_LIMIT: usize = 50;

/// Undo/redo log generic over the snapshot type
#[derive(Debug, Clone)]
pub struct History<S> {
    /// Snapshots, oldest first
    entries: Vec<S>,

    /// Index of the snapshot matching the live state
    cursor: usize,

    /// Maximum number of entries (at least 1)
    capacity: usize,
}

impl<S: Clone> History<S> {
    /// Create a history seeded with `seed`, holding up to [`HISTORY_LIMIT`] entries
    pub fn new(seed: S) -> Self {
        Self::with_capacity(seed, HISTORY_LIMIT)
    }

    /// Create a history with a custom capacity
    pub fn with_capacity(seed: S, capacity: usize) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a new snapshot, discarding any undone future
    pub fn record(&mut self, snapshot: &S) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot.clone());
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            let evicted = self.entries.len() - self.capacity;
            self.entries.drain(..evicted);
            self.cursor = self.entries.len() - 1;
            debug!(evicted, capacity = self.capacity, "history evicted oldest snapshots");
        }
    }

    /// Step back one snapshot. Returns the new current snapshot, or None at the start.
    pub fn undo(&mut self) -> Option<&S> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one snapshot. Returns the new current snapshot, or None at the end.
    pub fn redo(&mut self) -> Option<&S> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Drop every entry and start again from `seed`
    pub fn reset(&mut self, seed: S) {
        self.entries.clear();
        self.entries.push(seed);
        self.cursor = 0;
    }
}

impl<S> History<S> {
    /// Snapshot at the cursor
    pub fn current(&self) -> &S {
        &self.entries[self.cursor]
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.entries.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
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

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}
