//! Snapshot-based undo/redo history with bounded memory.
//!
//! Every mutation of the document records a deep copy of the pre-mutation
//! state. The past stack is bounded at [`HISTORY_LIMIT`] entries with FIFO
//! eviction; any new edit invalidates the redo stack.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Document, ElementId, SlideId};

/// Maximum number of undo steps kept in memory.
pub const HISTORY_LIMIT: usize = 80;

/// A deep copy of the observable editor state: the document plus the active
/// slide and element selection.
///
/// All fields are fully owned, so `Clone` is a genuine deep copy - later
/// mutation of the live document can never alter a stored snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The document at snapshot time.
    pub document: Document,
    /// Active slide at snapshot time.
    pub active_slide: Option<SlideId>,
    /// Selected element at snapshot time.
    pub selected_element: Option<ElementId>,
}

/// Bounded undo/redo stacks of [`Snapshot`]s.
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<Snapshot>,
    future: VecDeque<Snapshot>,
    limit: usize,
}

impl History {
    /// Create an empty history bounded at [`HISTORY_LIMIT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// Create an empty history with a custom bound.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    /// Record a pre-mutation snapshot.
    ///
    /// Evicts the oldest past entry once over the bound and clears the redo
    /// stack - a new edit always invalidates redo history.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back: exchange `current` for the most recent past snapshot.
    ///
    /// Returns `None` (discarding `current`) when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push_front(current);
        Some(previous)
    }

    /// Step forward: exchange `current` for the front of the redo stack.
    ///
    /// Returns `None` (discarding `current`) when there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop_front()?;
        self.past.push_back(current);
        Some(next)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of stored undo steps.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Drop all stored snapshots and continue from current state. The
    /// recovery path for a corrupt snapshot; nothing in the engine produces
    /// one today.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
