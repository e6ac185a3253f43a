//! UpdateTask command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId, Priority, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Merge a patch into an existing task.
///
/// The task's id and creation time are never touched; a patched title that
/// trims to empty is rejected before anything is applied.
#[derive(Debug)]
pub struct UpdateTask {
    /// The column currently holding the task
    pub column: ColumnId,
    /// The task to update
    pub id: TaskId,
    /// Fields to merge
    pub patch: TaskPatch,
}

impl UpdateTask {
    /// Create a new UpdateTask command with an empty patch
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            patch: TaskPatch::new(),
        }
    }

    /// Use a pre-built patch
    pub fn with_patch(mut self, patch: TaskPatch) -> Self {
        self.patch = patch;
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.patch.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.patch.description = Some(Some(description.into()));
        self
    }

    /// Remove the description
    pub fn clear_description(mut self) -> Self {
        self.patch.description = Some(None);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.patch.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.patch.due_date = Some(Some(due_date));
        self
    }

    /// Remove the due date
    pub fn clear_due_date(mut self) -> Self {
        self.patch.due_date = Some(None);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.patch.assignee = Some(Some(assignee.into()));
        self
    }

    /// Remove the assignee
    pub fn clear_assignee(mut self) -> Self {
        self.patch.assignee = Some(None);
        self
    }
}

impl Apply for UpdateTask {
    fn name(&self) -> &'static str {
        "update task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let mut patch = self.patch.clone();
        if let Some(title) = &mut patch.title {
            let trimmed = title.trim();
            if trimmed.is_empty() {
                return Err(BoardError::EmptyTitle);
            }
            *title = trimmed.to_string();
        }

        let column_pos = board
            .column_index(&self.column)
            .ok_or_else(|| BoardError::column_not_found(&self.column))?;
        let task_pos = board.columns[column_pos]
            .task_index(&self.id)
            .ok_or_else(|| BoardError::task_not_found(&self.id))?;

        let mut next = board.clone();
        let column = Arc::make_mut(&mut next.columns[column_pos]);
        patch.apply_to(Arc::make_mut(&mut column.tasks[task_pos]));
        Ok(next)
    }
}
