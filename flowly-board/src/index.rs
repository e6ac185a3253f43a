//! Reverse index from item ids to board positions.
//!
//! Hover processing is the hottest path in the engine and needs both ends of
//! a move (the dragged item and the hovered target) without scanning the
//! board. The index is derived from the board value and rebuilt after every
//! applied mutation, speculative or committed.

use crate::types::{Board, ColumnId, TaskId};
use std::collections::HashMap;

/// Where a task currently lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLocation {
    pub column: ColumnId,
    pub index: usize,
}

/// Id-to-position lookup for the current board value.
#[derive(Debug, Default)]
pub struct LocationIndex {
    tasks: HashMap<TaskId, TaskLocation>,
    columns: HashMap<ColumnId, usize>,
}

impl LocationIndex {
    /// Build the index for a board.
    pub fn build(board: &Board) -> Self {
        let mut tasks = HashMap::new();
        let mut columns = HashMap::new();
        for (column_pos, column) in board.columns.iter().enumerate() {
            columns.insert(column.id.clone(), column_pos);
            for (task_pos, task) in column.tasks.iter().enumerate() {
                tasks.insert(
                    task.id.clone(),
                    TaskLocation {
                        column: column.id.clone(),
                        index: task_pos,
                    },
                );
            }
        }
        Self { tasks, columns }
    }

    /// Current location of a task.
    pub fn task(&self, id: &TaskId) -> Option<&TaskLocation> {
        self.tasks.get(id)
    }

    /// Current position of a column in the board order.
    pub fn column(&self, id: &ColumnId) -> Option<usize> {
        self.columns.get(id).copied()
    }
}
