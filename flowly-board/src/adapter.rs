//! Presentation adapter.
//!
//! [`BoardApp`] is the surface a rendering host talks to. It wires the store,
//! the drag session, the auth gate, and optional persistence together, and
//! translates the host's pointer events into drag session calls:
//!
//! - pointer-down on a draggable element -> [`BoardApp::pointer_down`]
//! - pointer-move resolved to the target under the pointer -> [`BoardApp::pointer_move`]
//! - pointer-up -> [`BoardApp::pointer_up`]
//! - escape / pointer-cancel -> [`BoardApp::pointer_cancel`]
//!
//! The host renders from [`BoardApp::board`] and stays synchronized through
//! [`BoardApp::subscribe`]; persistence sees committed states only.

use crate::auth::{AuthError, AuthProvider, User};
use crate::column::{AddColumn, DeleteColumn, MoveColumn, RenameColumn};
use crate::defaults;
use crate::error::{BoardError, Result};
use crate::op::Apply;
use crate::persist::Persistence;
use crate::session::{DragItem, DragOutcome, DragSession, DropTarget};
use crate::store::{BoardStore, ChangeKind};
use crate::task::{AddTask, DeleteTask, MoveTask, UpdateTask};
use crate::types::{Board, ColumnId, Priority, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};

/// Per-user presentation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub dark_mode: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub language: String,
    pub timezone: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            email_notifications: true,
            push_notifications: false,
            language: "english".to_string(),
            timezone: "utc".to_string(),
        }
    }
}

/// The application shell around one board.
pub struct BoardApp {
    store: BoardStore,
    session: DragSession,
    auth: Box<dyn AuthProvider>,
    persistence: Option<Box<dyn Persistence>>,
    settings: UserSettings,
}

impl BoardApp {
    /// Start with the seeded demo board and no persistence.
    pub fn new(auth: Box<dyn AuthProvider>) -> Self {
        Self::with_board(auth, defaults::starter_board())
    }

    /// Start from a specific board value.
    pub fn with_board(auth: Box<dyn AuthProvider>, board: Board) -> Self {
        Self {
            store: BoardStore::new(board),
            session: DragSession::new(),
            auth,
            persistence: None,
            settings: UserSettings::default(),
        }
    }

    /// Start from persistence, seeding the demo board when nothing is stored.
    pub fn open(auth: Box<dyn AuthProvider>, persistence: Box<dyn Persistence>) -> Result<Self> {
        let board = match persistence.load()? {
            Some(board) => board,
            None => defaults::starter_board(),
        };
        let mut app = Self::with_board(auth, board);
        app.persistence = Some(persistence);
        Ok(app)
    }

    /// Read-only snapshot of the current board for rendering.
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    /// Register a change listener, called after every applied mutation.
    pub fn subscribe(&mut self, subscriber: impl Fn(&Board, ChangeKind) + 'static) {
        self.store.subscribe(subscriber);
    }

    // =========================================================================
    // Auth gate
    // =========================================================================

    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn login(&mut self, email: &str, password: &str) -> std::result::Result<User, AuthError> {
        self.auth.login(email, password)
    }

    pub fn sign_up(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> std::result::Result<User, AuthError> {
        self.auth.sign_up(name, email, password)
    }

    pub fn update_profile(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> std::result::Result<User, AuthError> {
        self.auth.update_profile(name, email)
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    fn ensure_authenticated(&self) -> Result<()> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(BoardError::NotAuthenticated)
        }
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: UserSettings) -> Result<()> {
        self.ensure_authenticated()?;
        self.settings = settings;
        Ok(())
    }

    // =========================================================================
    // Board mutations (committed immediately)
    // =========================================================================

    /// Create a column at the end of the board.
    pub fn create_column(&mut self, title: impl Into<String>) -> Result<ColumnId> {
        self.ensure_authenticated()?;
        let op = AddColumn::new(title);
        let id = op.id.clone();
        self.apply_and_persist(&op)?;
        Ok(id)
    }

    /// Rename a column.
    pub fn rename_column(
        &mut self,
        id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&RenameColumn::new(id, title))
    }

    /// Delete a column and all of its tasks.
    pub fn delete_column(&mut self, id: impl Into<ColumnId>) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&DeleteColumn::new(id))
    }

    /// Move a column to a new position.
    pub fn move_column(&mut self, id: impl Into<ColumnId>, to_index: usize) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&MoveColumn::new(id, to_index))
    }

    /// Create a task at the end of a column.
    pub fn create_task(
        &mut self,
        column: impl Into<ColumnId>,
        title: impl Into<String>,
        priority: Priority,
    ) -> Result<TaskId> {
        self.ensure_authenticated()?;
        let op = AddTask::new(column, title).with_priority(priority);
        let id = op.id.clone();
        self.apply_and_persist(&op)?;
        Ok(id)
    }

    /// Merge a patch into a task.
    pub fn update_task(
        &mut self,
        column: impl Into<ColumnId>,
        id: impl Into<TaskId>,
        patch: TaskPatch,
    ) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&UpdateTask::new(column, id).with_patch(patch))
    }

    /// Delete a task.
    pub fn delete_task(&mut self, column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&DeleteTask::new(column, id))
    }

    /// Move a task to a position in a column.
    pub fn move_task(
        &mut self,
        from_column: impl Into<ColumnId>,
        id: impl Into<TaskId>,
        to_column: impl Into<ColumnId>,
        to_index: usize,
    ) -> Result<()> {
        self.ensure_authenticated()?;
        self.apply_and_persist(&MoveTask::new(from_column, id, to_column, to_index))
    }

    // =========================================================================
    // Pointer contract
    // =========================================================================

    /// Pointer-down on a draggable element.
    pub fn pointer_down(&mut self, item: DragItem) -> Result<()> {
        self.ensure_authenticated()?;
        self.session.begin(&mut self.store, item)
    }

    /// Pointer-move while dragging, resolved to the target under the pointer.
    ///
    /// Moves with no drag in flight, or with nothing under the pointer, are
    /// ignored. A drag that is already open is never auth-gated, so it can
    /// always terminate.
    pub fn pointer_move(&mut self, target: Option<DropTarget>) -> Result<()> {
        if !self.session.is_dragging() {
            return Ok(());
        }
        match target {
            Some(target) => self.session.hover(&mut self.store, target),
            None => Ok(()),
        }
    }

    /// Pointer-up; a target commits the drag, no target cancels it.
    pub fn pointer_up(&mut self, target: Option<DropTarget>) -> Result<DragOutcome> {
        let outcome = self.session.end(&mut self.store, target)?;
        if outcome == DragOutcome::Committed {
            self.persist();
        }
        Ok(outcome)
    }

    /// Drag-cancel (escape key, pointer-cancel event).
    pub fn pointer_cancel(&mut self) -> Result<DragOutcome> {
        self.pointer_up(None)
    }

    fn apply_and_persist(&mut self, op: &dyn Apply) -> Result<()> {
        self.store.apply(op)?;
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        if let Some(persistence) = &self.persistence {
            if let Err(e) = persistence.save(self.store.board()) {
                tracing::warn!("failed to persist board: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryAuth;

    fn signed_in_app() -> BoardApp {
        let auth = MemoryAuth::new().with_account("ada@example.com", "secret");
        let mut app = BoardApp::with_board(Box::new(auth), Board::new("Test"));
        app.login("ada@example.com", "secret").unwrap();
        app
    }

    #[test]
    fn test_mutations_require_login() {
        let auth = MemoryAuth::new();
        let mut app = BoardApp::with_board(Box::new(auth), Board::new("Test"));
        let err = app.create_column("To Do").unwrap_err();
        assert!(matches!(err, BoardError::NotAuthenticated));
        assert!(app.board().columns.is_empty());
    }

    #[test]
    fn test_create_and_edit_through_the_gate() {
        let mut app = signed_in_app();
        let column = app.create_column("To Do").unwrap();
        let task = app
            .create_task(column.clone(), "First", Priority::High)
            .unwrap();
        app.update_task(
            column.clone(),
            task.clone(),
            TaskPatch::new().with_title("Renamed"),
        )
        .unwrap();

        let (_, stored) = app.board().find_task(&task).unwrap();
        assert_eq!(stored.title, "Renamed");
        assert_eq!(stored.priority, Priority::High);
    }

    #[test]
    fn test_column_lifecycle_through_the_gate() {
        let mut app = signed_in_app();
        let first = app.create_column("First").unwrap();
        let second = app.create_column("Second").unwrap();

        app.rename_column(first.clone(), "Renamed").unwrap();
        app.move_column(second.clone(), 0).unwrap();
        assert_eq!(app.board().columns[0].id, second);
        assert_eq!(app.board().columns[1].title, "Renamed");

        let task = app
            .create_task(first.clone(), "Short lived", Priority::Low)
            .unwrap();
        app.move_task(first.clone(), task.clone(), second.clone(), 0)
            .unwrap();
        app.delete_task(second.clone(), task.clone()).unwrap();
        assert!(app.board().find_task(&task).is_none());

        app.delete_column(first.clone()).unwrap();
        assert!(app.board().find_column(&first).is_none());
    }

    #[test]
    fn test_logout_closes_the_gate() {
        let mut app = signed_in_app();
        app.create_column("To Do").unwrap();
        app.logout();
        assert!(matches!(
            app.create_column("Doing"),
            Err(BoardError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_stray_pointer_moves_are_ignored() {
        let mut app = signed_in_app();
        let column = app.create_column("To Do").unwrap();
        app.pointer_move(Some(DropTarget::Column(column))).unwrap();
        app.pointer_move(None).unwrap();
    }

    #[test]
    fn test_settings_update() {
        let mut app = signed_in_app();
        assert!(!app.settings().dark_mode);
        let mut settings = app.settings().clone();
        settings.dark_mode = true;
        app.update_settings(settings).unwrap();
        assert!(app.settings().dark_mode);
    }

    #[test]
    fn test_starter_board_seeded() {
        let auth = MemoryAuth::new();
        let app = BoardApp::new(Box::new(auth));
        assert_eq!(app.board().columns.len(), 4);
    }
}
