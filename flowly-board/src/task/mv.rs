//! MoveTask command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId, TaskId};
use std::sync::Arc;

/// Move a task to a position in a column.
///
/// The task is removed from the source column and inserted into the
/// destination at `to_index`, clamped to the valid range. Source and
/// destination may be the same column, which makes this an in-place reorder.
/// The task must currently live in `from_column`; a task that exists
/// elsewhere on the board is still reported as not found.
#[derive(Debug)]
pub struct MoveTask {
    /// The column currently holding the task
    pub from_column: ColumnId,
    /// The task to move
    pub id: TaskId,
    /// Destination column
    pub to_column: ColumnId,
    /// Destination position in the column's task order
    pub to_index: usize,
}

impl MoveTask {
    /// Create a new MoveTask command
    pub fn new(
        from_column: impl Into<ColumnId>,
        id: impl Into<TaskId>,
        to_column: impl Into<ColumnId>,
        to_index: usize,
    ) -> Self {
        Self {
            from_column: from_column.into(),
            id: id.into(),
            to_column: to_column.into(),
            to_index,
        }
    }
}

impl Apply for MoveTask {
    fn name(&self) -> &'static str {
        "move task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let from_pos = board
            .column_index(&self.from_column)
            .ok_or_else(|| BoardError::column_not_found(&self.from_column))?;
        let to_pos = board
            .column_index(&self.to_column)
            .ok_or_else(|| BoardError::column_not_found(&self.to_column))?;
        let task_pos = board.columns[from_pos]
            .task_index(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        let mut next = board.clone();
        if from_pos == to_pos {
            let column = Arc::make_mut(&mut next.columns[from_pos]);
            let task = column.tasks.remove(task_pos);
            let at = self.to_index.min(column.tasks.len());
            column.tasks.insert(at, task);
        } else {
            let task = Arc::make_mut(&mut next.columns[from_pos])
                .tasks
                .remove(task_pos);
            let column = Arc::make_mut(&mut next.columns[to_pos]);
            let at = self.to_index.min(column.tasks.len());
            column.tasks.insert(at, task);
        }
        Ok(next)
    }
}
