use std::collections::VecDeque;
use tracing::debug;

use crate::io::configuration::HISTORY_CAPACITY;
use crate::motif::MotifLayer;
use crate::overlay::ManualFills;

/// Complete editable state at one point in time
///
/// Restoring a snapshot assigns these values back verbatim, so placement ids
/// and ordering come back exactly as captured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    /// Front-side motifs
    pub front_motifs: MotifLayer,
    /// Back-side motifs
    pub back_motifs: MotifLayer,
    /// Manual overrides for both sides
    pub manual_fills: ManualFills,
}

/// Undo/redo stacks of [`HistorySnapshot`]s
///
/// `capture` is called before every mutating edit with the state about to be
/// changed. `undo` swaps the newest captured state with the current one, and
/// `redo` reverses that. Both stacks hold at most `capacity` entries; the
/// oldest undo entry is evicted first.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistorySnapshot>,
    redo_stack: Vec<HistorySnapshot>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Create an empty history holding up to 50 snapshots
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom bound (at least one entry)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(capacity),
            redo_stack: Vec::new(),
            capacity,
        }
    }

    /// Record `current` as the state to return to on the next undo
    ///
    /// Starting a new edit invalidates anything that could be redone.
    pub fn capture(&mut self, current: HistorySnapshot) {
        self.undo_stack.push_back(current);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
        debug!(depth = self.undo_stack.len(), "Captured history snapshot");
    }

    /// Step back one edit
    ///
    /// Returns the state to restore, or `None` when there is nothing to undo.
    /// `current` becomes available to [`redo`](Self::redo).
    pub fn undo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        if self.redo_stack.len() > self.capacity {
            self.redo_stack.remove(0);
        }
        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Undo"
        );
        Some(previous)
    }

    /// Step forward one undone edit
    ///
    /// Returns the state to restore, or `None` when there is nothing to redo.
    pub fn redo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Redo"
        );
        Some(next)
    }

    /// Check whether an undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check whether a redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots that can be undone
    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Check whether no snapshot has been captured
    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    /// Maximum number of retained snapshots
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
