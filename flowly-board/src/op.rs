//! The `Apply` trait for board operations.
//!
//! Operations are structs where the fields ARE the parameters. `apply` takes
//! the current board and returns a new board with exactly one change applied;
//! an error means nothing changed. Implementations must not mutate the input
//! board and must share unaffected columns and tasks with the result.

use crate::error::Result;
use crate::types::Board;

/// A single atomic board update.
pub trait Apply {
    /// Operation name for logs, "verb noun" style.
    fn name(&self) -> &'static str;

    /// Produce the updated board, or an error describing why nothing changed.
    fn apply(&self, board: &Board) -> Result<Board>;
}
