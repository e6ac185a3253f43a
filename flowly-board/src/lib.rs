//! Drag-and-drop task board engine
//!
//! This crate is the in-memory core of a task board: ordered columns of
//! ordered tasks, with create/edit/delete operations and a drag-reordering
//! engine for both tasks and columns. Rendering, styling, and routing live in
//! a host; authentication and persistence are collaborators behind traits.
//!
//! ## Overview
//!
//! - **Value-oriented board** - operations take a board and return a new one,
//!   sharing unaffected columns and tasks via `Arc` for cheap change
//!   detection
//! - **Speculative drags** - while a drag is in flight, hover relocates the
//!   item in the live store so the rendered order tracks the pointer; a
//!   cancelled drag restores the pre-drag placement exactly
//! - **Committed-only persistence** - the load/save hooks see finalized
//!   states, never the intermediate in-drag ones
//! - **Thin auth gate** - mutations require a signed-in user, and nothing
//!   else depends on identity
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use flowly_board::auth::MemoryAuth;
//! use flowly_board::{BoardApp, DragItem, DropTarget, Priority};
//!
//! # fn example() -> flowly_board::Result<()> {
//! let auth = MemoryAuth::new().with_account("ada@example.com", "secret");
//! let mut app = BoardApp::new(Box::new(auth));
//! app.login("ada@example.com", "secret").expect("seeded account");
//!
//! let column = app.create_column("Inbox")?;
//! let task = app.create_task(column, "Try the board", Priority::Medium)?;
//!
//! // drag the new task into the first demo column
//! let first = app.board().columns[0].id.clone();
//! app.pointer_down(DragItem::Task(task))?;
//! app.pointer_move(Some(DropTarget::Column(first.clone())))?;
//! app.pointer_up(Some(DropTarget::Column(first)))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! host events -> BoardApp (adapter)
//!                  |- pointer events -> DragSession --- speculative moves -.
//!                  `- edit actions ----------------------- committed ops --+-> BoardStore
//!                                                                               |- change notifications -> host re-render
//!                                                                               `- committed states -> Persistence
//! ```

pub mod adapter;
pub mod auth;
pub mod column;
pub mod defaults;
mod error;
mod index;
mod op;
pub mod persist;
mod session;
mod store;
pub mod task;
pub mod types;

pub use adapter::{BoardApp, UserSettings};
pub use auth::{AuthError, AuthProvider, MemoryAuth, User};
pub use error::{BoardError, Result};
pub use index::{LocationIndex, TaskLocation};
pub use op::Apply;
pub use persist::{JsonFileStore, MemoryStore, Persistence};
pub use session::{DragItem, DragOutcome, DragSession, DropTarget};
pub use store::{BoardStore, ChangeKind};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Priority, Task, TaskId, TaskPatch};
