//! DeleteTask command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId, TaskId};
use std::sync::Arc;

/// Remove a task from its column.
#[derive(Debug)]
pub struct DeleteTask {
    /// The column currently holding the task
    pub column: ColumnId,
    /// The task to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

impl Apply for DeleteTask {
    fn name(&self) -> &'static str {
        "delete task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let column_pos = board
            .column_index(&self.column)
            .ok_or_else(|| BoardError::column_not_found(&self.column))?;
        let task_pos = board.columns[column_pos]
            .task_index(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        let mut next = board.clone();
        Arc::make_mut(&mut next.columns[column_pos])
            .tasks
            .remove(task_pos);
        Ok(next)
    }
}
