//! MoveColumn command

use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::types::{Board, ColumnId};

/// Move a column to a new position in the board's column order.
///
/// The column is removed and reinserted at `to_index`, clamped to the valid
/// range, so indexes past the end land the column last.
#[derive(Debug)]
pub struct MoveColumn {
    /// The column to move
    pub id: ColumnId,
    /// Destination position in the column order
    pub to_index: usize,
}

impl MoveColumn {
    /// Create a new MoveColumn command
    pub fn new(id: impl Into<ColumnId>, to_index: usize) -> Self {
        Self {
            id: id.into(),
            to_index,
        }
    }
}

impl Apply for MoveColumn {
    fn name(&self) -> &'static str {
        "move column"
    }

    fn apply(&self, board: &Board) -> Result<Board> {
        let column_pos = board
            .column_index(&self.id)
            .ok_or_else(|| BoardError::column_not_found(&self.id))?;
        let mut next = board.clone();
        let column = next.columns.remove(column_pos);
        let at = self.to_index.min(next.columns.len());
        next.columns.insert(at, column);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::AddColumn;

    fn board_with_columns(titles: &[&str]) -> (Board, Vec<ColumnId>) {
        let mut board = Board::new("Test");
        let mut ids = Vec::new();
        for title in titles {
            let op = AddColumn::new(*title);
            ids.push(op.id.clone());
            board = op.apply(&board).unwrap();
        }
        (board, ids)
    }

    fn column_order(board: &Board) -> Vec<ColumnId> {
        board.columns.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_move_column_to_front() {
        let (board, ids) = board_with_columns(&["A", "B", "C"]);
        let next = MoveColumn::new(ids[2].clone(), 0).apply(&board).unwrap();
        assert_eq!(
            column_order(&next),
            vec![ids[2].clone(), ids[0].clone(), ids[1].clone()]
        );
    }

    #[test]
    fn test_move_column_clamps_past_end() {
        let (board, ids) = board_with_columns(&["A", "B", "C"]);
        let next = MoveColumn::new(ids[0].clone(), 99).apply(&board).unwrap();
        assert_eq!(
            column_order(&next),
            vec![ids[1].clone(), ids[2].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn test_move_column_same_position() {
        let (board, ids) = board_with_columns(&["A", "B"]);
        let next = MoveColumn::new(ids[1].clone(), 1).apply(&board).unwrap();
        assert_eq!(column_order(&next), column_order(&board));
    }

    #[test]
    fn test_move_missing_column() {
        let (board, _) = board_with_columns(&["A"]);
        let result = MoveColumn::new("missing", 0).apply(&board);
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
