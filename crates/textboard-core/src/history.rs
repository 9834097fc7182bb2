//! Undo/redo history over the item store.

use crate::store::{ItemStore, Snapshot};

/// Wraps an [`ItemStore`] with snapshot-based undo and redo.
///
/// `past` holds pre-mutation states, oldest first. `future` holds undone
/// states; its top (the end of the vector) is the most recently undone one.
/// The live store content is never a member of either stack.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    store: ItemStore,
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    limit: Option<usize>,
}

impl HistoryManager {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            past: Vec::new(),
            future: Vec::new(),
            limit: None,
        }
    }

    /// Keep at most `limit` undo states, dropping the oldest first.
    ///
    /// A limit of zero is raised to one so the last step stays undoable.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.map(|limit| limit.max(1));
        self.trim();
        self
    }

    /// The live store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Mutable access that bypasses history.
    ///
    /// Changes made through this reference are not undoable.
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    /// Record the current state, then apply `mutation` to the store.
    pub fn record_and_apply<T>(&mut self, mutation: impl FnOnce(&mut ItemStore) -> T) -> T {
        let snapshot = self.store.snapshot();
        self.commit(snapshot);
        mutation(&mut self.store)
    }

    /// Like [`record_and_apply`](Self::record_and_apply), but history is only
    /// touched when the mutation succeeds.
    pub fn try_record_and_apply<T, E>(
        &mut self,
        mutation: impl FnOnce(&mut ItemStore) -> Result<T, E>,
    ) -> Result<T, E> {
        let snapshot = self.store.snapshot();
        let result = mutation(&mut self.store)?;
        self.commit(snapshot);
        Ok(result)
    }

    fn commit(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        // A new branch invalidates everything that was undone
        self.future.clear();
        self.trim();
        log::debug!(
            "Recorded history step (undo depth {}, {} items before change)",
            self.past.len(),
            self.past.last().map_or(0, |s| s.len())
        );
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }

    /// Undo the last recorded change.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = self.store.snapshot();
        self.future.push(current);
        self.store.restore(&previous);
        log::debug!(
            "Undo (undo depth {}, redo depth {})",
            self.past.len(),
            self.future.len()
        );
        true
    }

    /// Redo the last undone change.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = self.store.snapshot();
        self.past.push(current);
        self.store.restore(&next);
        log::debug!(
            "Redo (undo depth {}, redo depth {})",
            self.past.len(),
            self.future.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Undo states, oldest first.
    pub fn past(&self) -> &[Snapshot] {
        &self.past
    }

    /// Redo states, nearest (next to be redone) first.
    pub fn future(&self) -> impl Iterator<Item = &Snapshot> {
        self.future.iter().rev()
    }

    /// Forget all history. The store is left as it is.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
