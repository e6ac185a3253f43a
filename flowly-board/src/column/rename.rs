//! RenameColumn command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId};
use std::sync::Arc;

/// Replace a column's title.
///
/// Renaming to the current title is a benign no-op and returns the board
/// unchanged; an empty title or an unknown column id is an error.
#[derive(Debug)]
pub struct RenameColumn {
    /// The column to rename
    pub id: ColumnId,
    /// The new title
    pub title: String,
}

impl RenameColumn {
    /// Create a new RenameColumn command
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Apply for RenameColumn {
    fn name(&self) -> &'static str {
        "rename column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let column_pos = board
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;
        if board.columns[column_pos].title == title {
            return Ok(board.clone());
        }

        let mut next = board.clone();
        Arc::make_mut(&mut next.columns[column_pos]).title = title.to_string();
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
    fn test_rename_column() {
        let (board, id) = board_with_column();
        let next = RenameColumn::new(id.clone(), "Backlog").apply(&board).unwrap();
        assert_eq!(next.columns[0].title, "Backlog");
        assert_eq!(board.columns[0].title, "To Do");
    }

    #[test]
    fn test_rename_same_title_is_noop() {
        let (board, id) = board_with_column();
        let next = RenameColumn::new(id, "To Do").apply(&board).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_rename_empty_title_rejected() {
        let (board, id) = board_with_column();
        assert!(matches!(
            RenameColumn::new(id, "  ").apply(&board),
            Err(BoardError::EmptyTitle)
        ));
    }

    #[test]
    fn test_rename_missing_column() {
        let (board, _) = board_with_column();
        let result = RenameColumn::new("missing", "Backlog").apply(&board);
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
