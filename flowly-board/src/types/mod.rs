//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use ids::{ColumnId, TaskId};
pub use task::{Priority, Task, TaskPatch};
