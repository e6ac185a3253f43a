//! AddColumn command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, Column, ColumnId};
use std::sync::Arc;

/// Append a new empty column to the board.
#[derive(Debug)]
pub struct AddColumn {
    /// Id assigned to the new column, generated at construction so the
    /// caller can refer to the column after applying.
    pub id: ColumnId,
    /// The column display title
    pub title: String,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
        }
    }
}

impl Apply for AddColumn {
    fn name(&self) -> &'static str {
        "add column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        if board.find_column(&self.id).is_some() {
            return Err(BoardError::duplicate_id("column", &self.id));
        }

        let mut next = board.clone();
        next.columns.push(Arc::new(Column {
            id: self.id.clone(),
            title: title.to_string(),
            tasks: Vec::new(),
        }));
        Ok(next)
    }
}
