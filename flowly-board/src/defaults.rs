//! Seeded starter board.
//!
//! First run (or a persistence layer with nothing stored) gets this demo
//! content so there is something to drag around immediately.

use crate::types::{Board, Column, Priority, Task};
use chrono::{Duration, Utc};
use std::sync::Arc;

/// The demo board used when no stored board exists.
pub fn starter_board() -> Board {
    let now = Utc::now();

    let mut todo = Column::new("To Do");
    todo.tasks.push(Arc::new(
        Task::new("Research user needs")
            .with_description(
                "Conduct interviews with potential users to understand their requirements",
            )
            .with_priority(Priority::High)
            .with_due_date(now + Duration::days(3)),
    ));
    todo.tasks
        .push(Arc::new(Task::new("Design wireframes").with_priority(Priority::Medium)));

    let mut in_progress = Column::new("In Progress");
    in_progress.tasks.push(Arc::new(
        Task::new("Implement authentication")
            .with_description("Set up user registration and login flows")
            .with_priority(Priority::High)
            .with_due_date(now + Duration::days(1)),
    ));

    let review = Column::new("Review");

    let mut done = Column::new("Done");
    done.tasks.push(Arc::new(
        Task::new("Project setup")
            .with_description("Initialize repository and configure build tools")
            .with_priority(Priority::Low),
    ));

    let mut board = Board::new("Flowly Boards");
    board.columns = vec![
        Arc::new(todo),
        Arc::new(in_progress),
        Arc::new(review),
        Arc::new(done),
    ];
    board
}
