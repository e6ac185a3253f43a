//! DeleteColumn command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId};

/// Remove a column and every task it holds.
#[derive(Debug)]
pub struct DeleteColumn {
    /// The column to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    /// Create a new DeleteColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Apply for DeleteColumn {
    fn name(&self) -> &'static str {
        "delete column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let column_pos = board
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;
        let mut next = board.clone();
        next.columns.remove(column_pos);
        Ok(next)
    }
}
