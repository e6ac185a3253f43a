//! BoardStore - the single mutable home of the board value.
//!
//! The store owns the current `Board`, the derived [`LocationIndex`], and the
//! change subscribers. All mutation funnels through it: committed updates via
//! [`BoardStore::apply`], and speculative relocations driven by an open drag
//! session. Subscribers are notified after every applied mutation so a view
//! stays synchronized with both kinds.
//!
//! While a drag session is open the board belongs to the session: external
//! `apply` calls are rejected rather than interleaved with speculative moves,
//! so the session's begin-time snapshot always restores cleanly.

use crate::error::{BoardError, Result};
use crate::index::LocationIndex;
use crate::op::Apply;
use crate::types::Board;

/// How a change notification relates to the committed board history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Provisional relocation during an open drag session.
    Speculative,
    /// A finalized change; safe to persist.
    Committed,
    /// A cancelled drag restored the pre-drag placement.
    Reverted,
}

type Subscriber = Box<dyn Fn(&Board, ChangeKind)>;

/// Owns the board value and fans out change notifications.
pub struct BoardStore {
    board: Board,
    index: LocationIndex,
    subscribers: Vec<Subscriber>,
    drag_active: bool,
}

impl BoardStore {
    /// Create a store around an initial board value.
    pub fn new(board: Board) -> Self {
        let index = LocationIndex::build(&board);
        Self {
            board,
            index,
            subscribers: Vec::new(),
            drag_active: false,
        }
    }

    /// Read-only snapshot of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The derived id-to-position index for the current board.
    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    /// Whether a drag session currently owns the board.
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Register a change listener, called after every applied mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Board, ChangeKind) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a committed mutation. Rejected while a drag session is open.
    pub fn apply(&mut self, op: &dyn Apply) -> Result<()> {
        if self.drag_active {
            tracing::debug!(op = op.name(), "rejecting mutation during drag session");
            return Err(BoardError::DragInProgress);
        }
        let next = op.apply(&self.board)?;
        tracing::debug!(op = op.name(), "committed");
        self.install(next, ChangeKind::Committed);
        Ok(())
    }

    // =========================================================================
    // Drag session integration
    // =========================================================================

    pub(crate) fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// Apply a speculative relocation from an open drag session.
    pub(crate) fn speculate(&mut self, op: &dyn Apply) -> Result<()> {
        let next = op.apply(&self.board)?;
        self.install(next, ChangeKind::Speculative);
        Ok(())
    }

    /// Promote the current (hover-relocated) board to committed.
    pub(crate) fn commit_current(&mut self) {
        self.notify(ChangeKind::Committed);
    }

    /// Restore a snapshot taken before the drag began.
    pub(crate) fn restore(&mut self, board: Board) {
        self.install(board, ChangeKind::Reverted);
    }

    fn install(&mut self, board: Board, kind: ChangeKind) {
        self.board = board;
        self.index = LocationIndex::build(&self.board);
        self.notify(kind);
    }

    fn notify(&self, kind: ChangeKind) {
        for subscriber in &self.subscribers {
            subscriber(&self.board, kind);
        }
    }
}
