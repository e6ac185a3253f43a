//! AddTask command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId, Priority, Task, TaskId};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Append a new task to a column.
#[derive(Debug)]
pub struct AddTask {
    /// Id assigned to the new task, generated at construction so the caller
    /// can refer to the task after applying.
    pub id: TaskId,
    /// The column to append to
    pub column: ColumnId,
    /// The task title
    pub title: String,
    /// Priority badge
    pub priority: Priority,
    /// Optional body text
    pub description: Option<String>,
    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
    /// Optional assignee display name
    pub assignee: Option<String>,
}

impl AddTask {
    /// Create a new AddTask command
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            column: column.into(),
            title: title.into(),
            priority: Priority::default(),
            description: None,
            due_date: None,
            assignee: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

impl Apply for AddTask {
    fn name(&self) -> &'static str {
        "add task"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let column_pos = board
            .column_index(&self.column)
            .ok_or_else(|| BoardError::column_not_found(&self.column))?;
        if board.find_task(&self.id).is_some() {
            return Err(BoardError::duplicate_id("task", &self.id));
        }

        let task = Task {
            id: self.id.clone(),
            title: title.to_string(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date,
            assignee: self.assignee.clone(),
            created_at: Utc::now(),
        };

        let mut next = board.clone();
        Arc::make_mut(&mut next.columns[column_pos])
            .tasks
            .push(Arc::new(task));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;

    fn board_with_column() -> (Board, ColumnId) {
        let op = AddColumn::new("To Do");
        let board = op.apply(&Board::new("Test")).unwrap();
        (board, op.id)
    }

    #[test]
    fn test_add_task_appends() {
        let (board, column_id) = board_with_column();
        let op = AddTask::new(column_id.clone(), "First").with_priority(Priority::High);
        let next = op.apply(&board).unwrap();

        let column = next.find_column(&column_id).unwrap();
        assert_eq!(column.tasks.len(), 1);
        assert_eq!(column.tasks[0].id, op.id);
        assert_eq!(column.tasks[0].title, "First");
        assert_eq!(column.tasks[0].priority, Priority::High);
        // input untouched
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_add_task_preserves_order() {
        let (board, column_id) = board_with_column();
        let first = AddTask::new(column_id.clone(), "First");
        let second = AddTask::new(column_id.clone(), "Second");
        let board = first.apply(&board).unwrap();
        let board = second.apply(&board).unwrap();
        assert_eq!(board.task_ids(), vec![first.id, second.id]);
    }

    #[test]
    fn test_add_task_empty_title_rejected() {
        let (board, column_id) = board_with_column();
        assert!(matches!(
            AddTask::new(column_id, "  ").apply(&board),
            Err(BoardError::EmptyTitle)
        ));
    }

    #[test]
    fn test_add_task_missing_column() {
        let (board, _) = board_with_column();
        let result = AddTask::new("missing", "Task").apply(&board);
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_add_task_duplicate_id_rejected() {
        let (board, column_id) = board_with_column();
        let op = AddTask::new(column_id, "Task");
        let next = op.apply(&board).unwrap();
        assert!(matches!(
            op.apply(&next),
            Err(BoardError::DuplicateId { .. })
        ));
    }
}
