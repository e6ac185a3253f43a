//! Persistence collaborator.
//!
//! The engine only hands a board to persistence after a committed change;
//! speculative in-drag states never reach it. [`JsonFileStore`] writes the
//! whole board as one pretty-printed JSON document, and [`MemoryStore`] is
//! the in-process equivalent of browser local storage for hosts and tests.

use crate::error::Result;
use crate::types::Board;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// Load/save hooks for committed board states.
pub trait Persistence {
    /// Load the stored board, if one exists.
    fn load(&self) -> Result<Option<Board>>;

    /// Store a committed board.
    fn save(&self, board: &Board) -> Result<()>;
}

/// Whole-board JSON file persistence.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<Option<Board>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, board: &Board) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(board)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory persistence slot. Clones share the same slot, so a host can
/// keep a handle for inspection while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Board>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved board, if any.
    pub fn stored(&self) -> Option<Board> {
        self.slot.borrow().clone()
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> Result<Option<Board>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, board: &Board) -> Result<()> {
        *self.slot.borrow_mut() = Some(board.clone());
        Ok(())
    }
}
