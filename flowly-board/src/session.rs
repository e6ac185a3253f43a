//! Drag session tracking and commit resolution.
//!
//! A drag session is the interval between `begin` and `end` (or `cancel`)
//! during which one task or column has a provisional position. While the
//! session is open, `hover` speculatively relocates the dragged item inside
//! the live store so the rendered order always matches the pointer; the
//! begin-time snapshot is kept so a cancelled drag restores the original
//! placement exactly. Dropping on a target applies no further move - the
//! board as relocated by the last hover is simply promoted to committed.
//!
//! Hover is the highest-frequency call in the engine. Repeated identical
//! targets are coalesced, so it is idempotent, and both ends of a move are
//! resolved through the store's [`LocationIndex`](crate::LocationIndex)
//! rather than board scans.
//!
//! Cross-kind rules: a column reorders only among columns, and a task drops
//! only among tasks or onto a column (which appends it to that column).

use crate::column::MoveColumn;
use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::task::MoveTask;
use crate::types::{Board, ColumnId, TaskId};

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Task(TaskId),
    Column(ColumnId),
}

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A specific task position within a column.
    Task(TaskId),
    /// A column: its empty area for a dragged task, or the column's own
    /// position for a dragged column.
    Column(ColumnId),
}

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped on a target; the relocated board is now committed.
    Committed,
    /// The session ended without any net movement.
    Unchanged,
    /// Cancelled; the pre-drag placement was restored.
    Reverted,
}

enum State {
    Idle,
    Dragging {
        item: DragItem,
        origin: Board,
        last_target: Option<DropTarget>,
    },
}

/// State machine for the in-progress drag.
pub struct DragSession {
    state: State,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Whether a drag session is currently open.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// The item being dragged, if a session is open.
    pub fn dragged_item(&self) -> Option<&DragItem> {
        match &self.state {
            State::Dragging { item, .. } => Some(item),
            State::Idle => None,
        }
    }

    /// Open a drag session for an item that exists on the board.
    ///
    /// Snapshots the board for revert-on-cancel and locks the store against
    /// external mutation. Fails without opening a session if the item cannot
    /// be located or a session is already open.
    pub fn begin(&mut self, store: &mut BoardStore, item: DragItem) -> Result<()> {
        if self.is_dragging() {
            return Err(BoardError::DragInProgress);
        }
        match &item {
            DragItem::Task(id) => {
                store
                    .index()
                    .task(id)
                    .ok_or_else(|| BoardError::task_not_found(id))?;
            }
            DragItem::Column(id) => {
                store
                    .index()
                    .column(id)
                    .ok_or_else(|| BoardError::column_not_found(id))?;
            }
        }
        let origin = store.board().clone();
        store.set_drag_active(true);
        tracing::debug!(item = ?item, "drag session opened");
        self.state = State::Dragging {
            item,
            origin,
            last_target: None,
        };
        Ok(())
    }

    /// Process a pointer-move over a candidate drop target.
    ///
    /// If the target differs from the dragged item's current position, the
    /// item is relocated speculatively: a task dropped over another task
    /// takes that task's current index (list-insertion semantics), a task
    /// over a column appends to it, and a column over another column takes
    /// that column's position in the board order.
    pub fn hover(&mut self, store: &mut BoardStore, target: DropTarget) -> Result<()> {
        let State::Dragging {
            item, last_target, ..
        } = &mut self.state
        else {
            return Err(BoardError::NoActiveDrag);
        };

        if is_same_item(item, &target) {
            return Ok(());
        }
        if last_target.as_ref() == Some(&target) {
            // coalesce repeated identical targets
            return Ok(());
        }

        match (&*item, &target) {
            (DragItem::Task(id), DropTarget::Task(hovered)) => {
                let dest = store
                    .index()
                    .task(hovered)
                    .ok_or_else(|| BoardError::task_not_found(hovered))?
                    .clone();
                let current = store
                    .index()
                    .task(id)
                    .ok_or_else(|| BoardError::task_not_found(id))?
                    .clone();
                store.speculate(&MoveTask::new(
                    current.column,
                    id.clone(),
                    dest.column,
                    dest.index,
                ))?;
            }
            (DragItem::Task(id), DropTarget::Column(column)) => {
                let dest_pos = store
                    .index()
                    .column(column)
                    .ok_or_else(|| BoardError::column_not_found(column))?;
                let current = store
                    .index()
                    .task(id)
                    .ok_or_else(|| BoardError::task_not_found(id))?
                    .clone();
                let len = store.board().columns[dest_pos].tasks.len();
                let already_last = current.column == *column && current.index + 1 == len;
                if !already_last {
                    store.speculate(&MoveTask::new(
                        current.column,
                        id.clone(),
                        column.clone(),
                        len,
                    ))?;
                }
            }
            (DragItem::Column(id), DropTarget::Column(hovered)) => {
                let dest = store
                    .index()
                    .column(hovered)
                    .ok_or_else(|| BoardError::column_not_found(hovered))?;
                store.speculate(&MoveColumn::new(id.clone(), dest))?;
            }
            (DragItem::Column(_), DropTarget::Task(_)) => {
                // columns reorder among columns only
                return Err(BoardError::InvalidDragTarget);
            }
        }

        *last_target = Some(target);
        Ok(())
    }

    /// Close the session.
    ///
    /// With a target, the board as relocated by the last hover becomes the
    /// committed state; no further move is applied. Without a target the
    /// drag is cancelled and the begin-time placement is restored. Either
    /// way the store is unlocked for external mutation again.
    pub fn end(&mut self, store: &mut BoardStore, target: Option<DropTarget>) -> Result<DragOutcome> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        let State::Dragging { origin, .. } = state else {
            return Err(BoardError::NoActiveDrag);
        };
        store.set_drag_active(false);

        let moved = *store.board() != origin;
        match target {
            Some(_) => {
                if moved {
                    store.commit_current();
                    tracing::debug!("drag committed");
                    Ok(DragOutcome::Committed)
                } else {
                    Ok(DragOutcome::Unchanged)
                }
            }
            None => {
                if moved {
                    store.restore(origin);
                    tracing::debug!("drag cancelled, origin restored");
                    Ok(DragOutcome::Reverted)
                } else {
                    Ok(DragOutcome::Unchanged)
                }
            }
        }
    }

    /// Cancel the session; identical to `end` with no target.
    pub fn cancel(&mut self, store: &mut BoardStore) -> Result<DragOutcome> {
        self.end(store, None)
    }
}

fn is_same_item(item: &DragItem, target: &DropTarget) -> bool {
    match (item, target) {
        (DragItem::Task(a), DropTarget::Task(b)) => a == b,
        (DragItem::Column(a), DropTarget::Column(b)) => a == b,
        _ => false,
    }
}
