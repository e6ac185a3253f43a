//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named, ordered bucket of tasks. Task order is display order, not a sort
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Arc<Task>>,
}

impl Column {
    /// Create a new empty column with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Position of a task in this column.
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Find a task in this column.
    pub fn find_task(&self, id: &TaskId) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}

/// The whole board: an ordered sequence of columns.
///
/// Update operations never mutate a board in place. They produce a new value
/// that shares every unaffected column and task via `Arc`, so a view layer
/// can diff two snapshots with `Arc::ptr_eq` instead of deep comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Arc<Column>>,
}

impl Board {
    /// Create a new board with the given title and no columns.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Find a column by id.
    pub fn find_column(&self, id: &ColumnId) -> Option<&Arc<Column>> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Position of a column in the board's column order.
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Find a task anywhere on the board, with its owning column.
    pub fn find_task(&self, id: &TaskId) -> Option<(&Arc<Column>, &Arc<Task>)> {
        self.columns
            .iter()
            .find_map(|c| c.find_task(id).map(|t| (c, t)))
    }

    /// Every task id on the board, in column order then task order.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id.clone()))
            .collect()
    }

    /// Total number of tasks across all columns.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}
