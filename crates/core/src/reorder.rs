//! Drag-reorder state machine for the dashboard project list.
//!
//! Front ends embed this to track a single pick-up/drop gesture over an
//! ordered id list. Persisting the sequence returned by [`ReorderController::drop_on`]
//! (via `PUT /user/order`) is the caller's concern and is treated as
//! optimistic: the in-memory order is already updated when the sequence is
//! handed back.

use crate::types::DbId;

/// Reasons a drag cannot start.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("a drag is already in progress")]
    DragInProgress,

    #[error("no entry with id {0}")]
    UnknownEntry(DbId),
}

/// In-memory ordered list with a single active-drag slot.
///
/// States: idle, or dragging exactly one entry. A second drag cannot start
/// while one is active.
#[derive(Debug, Clone)]
pub struct ReorderController {
    items: Vec<DbId>,
    active: Option<DbId>,
}

impl ReorderController {
    pub fn new(items: Vec<DbId>) -> Self {
        Self {
            items,
            active: None,
        }
    }

    /// The current order.
    pub fn items(&self) -> &[DbId] {
        &self.items
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Pick up an entry. Fails when another drag is active or the id is
    /// not in the list.
    pub fn begin_drag(&mut self, id: DbId) -> Result<(), ReorderError> {
        if self.active.is_some() {
            return Err(ReorderError::DragInProgress);
        }
        if !self.items.contains(&id) {
            return Err(ReorderError::UnknownEntry(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Drop the active entry on `target`, returning to idle.
    ///
    /// When the target is a different entry, the active entry is removed
    /// from its old index and reinserted at the target's index, and the
    /// full new sequence is returned for persistence. Dropping an entry on
    /// itself or on an unknown target moves nothing and returns `None`.
    pub fn drop_on(&mut self, target: DbId) -> Option<Vec<DbId>> {
        let active = self.active.take()?;
        if active == target {
            return None;
        }

        let from = self.items.iter().position(|&id| id == active)?;
        let to = self.items.iter().position(|&id| id == target)?;

        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        Some(self.items.clone())
    }

    /// Abort the drag without touching the order.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
