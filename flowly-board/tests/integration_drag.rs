//! Integration tests for drag reordering against the store + session pair.

use flowly_board::column::AddColumn;
use flowly_board::task::{AddTask, DeleteTask};
use flowly_board::{
    Board, BoardError, BoardStore, ChangeKind, ColumnId, DragItem, DragOutcome, DragSession,
    DropTarget, TaskId,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Store with columns A = [t1, t2, t3], B = [], C = [u1].
fn setup() -> (BoardStore, Vec<ColumnId>, Vec<TaskId>) {
    let mut store = BoardStore::new(Board::new("Test"));
    let mut columns = Vec::new();
    for title in ["A", "B", "C"] {
        let op = AddColumn::new(title);
        columns.push(op.id.clone());
        store.apply(&op).unwrap();
    }
    let mut tasks = Vec::new();
    for title in ["t1", "t2", "t3"] {
        let op = AddTask::new(columns[0].clone(), title);
        tasks.push(op.id.clone());
        store.apply(&op).unwrap();
    }
    let extra = AddTask::new(columns[2].clone(), "u1");
    tasks.push(extra.id.clone());
    store.apply(&extra).unwrap();
    (store, columns, tasks)
}

fn task_order(store: &BoardStore, column: &ColumnId) -> Vec<TaskId> {
    store
        .board()
        .find_column(column)
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id.clone())
        .collect()
}

#[test]
fn test_reorder_to_end_of_own_column() {
    let (mut store, columns, tasks) = setup();
    let mut session = DragSession::new();

    session
        .begin(&mut store, DragItem::Task(tasks[0].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Task(tasks[2].clone()))
        .unwrap();
    let outcome = session
        .end(&mut store, Some(DropTarget::Task(tasks[2].clone())))
        .unwrap();

    assert_eq!(outcome, DragOutcome::Committed);
    assert_eq!(
        task_order(&store, &columns[0]),
        vec![tasks[1].clone(), tasks[2].clone(), tasks[0].clone()]
    );
}

#[test]
fn test_move_into_empty_column() {
    let mut store = BoardStore::new(Board::new("Test"));
    let col_a = AddColumn::new("A");
    let col_b = AddColumn::new("B");
    store.apply(&col_a).unwrap();
    store.apply(&col_b).unwrap();
    let t1 = AddTask::new(col_a.id.clone(), "t1");
    store.apply(&t1).unwrap();

    let mut session = DragSession::new();
    session
        .begin(&mut store, DragItem::Task(t1.id.clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Column(col_b.id.clone()))
        .unwrap();
    session
        .end(&mut store, Some(DropTarget::Column(col_b.id.clone())))
        .unwrap();

    assert!(store.board().find_column(&col_a.id).unwrap().tasks.is_empty());
    assert_eq!(task_order(&store, &col_b.id), vec![t1.id.clone()]);
}

#[test]
fn test_reorder_columns() {
    let (mut store, columns, _) = setup();
    let mut session = DragSession::new();

    session
        .begin(&mut store, DragItem::Column(columns[0].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Column(columns[2].clone()))
        .unwrap();
    session
        .end(&mut store, Some(DropTarget::Column(columns[2].clone())))
        .unwrap();

    let order: Vec<ColumnId> = store
        .board()
        .columns
        .iter()
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(
        order,
        vec![columns[1].clone(), columns[2].clone(), columns[0].clone()]
    );
}

#[test]
fn test_every_task_survives_a_wandering_drag() {
    let (mut store, columns, tasks) = setup();
    let mut session = DragSession::new();

    session
        .begin(&mut store, DragItem::Task(tasks[1].clone()))
        .unwrap();
    // wander across every column and a few task targets
    for target in [
        DropTarget::Column(columns[1].clone()),
        DropTarget::Task(tasks[3].clone()),
        DropTarget::Task(tasks[0].clone()),
        DropTarget::Column(columns[2].clone()),
        DropTarget::Task(tasks[2].clone()),
    ] {
        session.hover(&mut store, target).unwrap();
    }
    session
        .end(&mut store, Some(DropTarget::Task(tasks[2].clone())))
        .unwrap();

    let mut ids = store.board().task_ids();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    let mut expected = tasks.clone();
    expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    assert_eq!(ids, expected);
}

#[test]
fn test_cancel_restores_task_and_column_orders() {
    let (mut store, columns, tasks) = setup();
    let before: Vec<Vec<TaskId>> = columns.iter().map(|c| task_order(&store, c)).collect();
    let origin = store.board().clone();

    let mut session = DragSession::new();
    session
        .begin(&mut store, DragItem::Task(tasks[2].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Column(columns[1].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Task(tasks[3].clone()))
        .unwrap();
    let outcome = session.end(&mut store, None).unwrap();

    assert_eq!(outcome, DragOutcome::Reverted);
    assert_eq!(*store.board(), origin);
    let after: Vec<Vec<TaskId>> = columns.iter().map(|c| task_order(&store, c)).collect();
    assert_eq!(after, before);
}

#[test]
fn test_repeated_hover_leaves_one_change() {
    let (mut store, _, tasks) = setup();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    store.subscribe(move |_, kind| sink.borrow_mut().push(kind));

    let mut session = DragSession::new();
    session
        .begin(&mut store, DragItem::Task(tasks[0].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Task(tasks[2].clone()))
        .unwrap();
    let once = store.board().clone();
    session
        .hover(&mut store, DropTarget::Task(tasks[2].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Task(tasks[2].clone()))
        .unwrap();

    assert_eq!(*store.board(), once);
    // one speculative notification, not three
    assert_eq!(*events.borrow(), vec![ChangeKind::Speculative]);
}

#[test]
fn test_notification_kinds_through_a_drag() {
    let (mut store, columns, tasks) = setup();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    store.subscribe(move |_, kind| sink.borrow_mut().push(kind));

    let mut session = DragSession::new();
    session
        .begin(&mut store, DragItem::Task(tasks[0].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Column(columns[1].clone()))
        .unwrap();
    session
        .end(&mut store, Some(DropTarget::Column(columns[1].clone())))
        .unwrap();
    assert_eq!(
        *events.borrow(),
        vec![ChangeKind::Speculative, ChangeKind::Committed]
    );

    events.borrow_mut().clear();
    session
        .begin(&mut store, DragItem::Task(tasks[0].clone()))
        .unwrap();
    session
        .hover(&mut store, DropTarget::Column(columns[0].clone()))
        .unwrap();
    session.end(&mut store, None).unwrap();
    assert_eq!(
        *events.borrow(),
        vec![ChangeKind::Speculative, ChangeKind::Reverted]
    );
}

#[test]
fn test_external_edits_locked_out_mid_drag() {
    let (mut store, _, tasks) = setup();
    let mut session = DragSession::new();
    session
        .begin(&mut store, DragItem::Task(tasks[0].clone()))
        .unwrap();

    let err = store.apply(&AddColumn::new("Late")).unwrap_err();
    assert!(matches!(err, BoardError::DragInProgress));

    session.cancel(&mut store).unwrap();
    store.apply(&AddColumn::new("Late")).unwrap();
    assert_eq!(store.board().columns.len(), 4);
}

#[test]
fn test_missing_ids_report_not_found_without_change() {
    let (mut store, _, _) = setup();
    let before = store.board().clone();

    let err = store
        .apply(&DeleteTask::new("missing-col", "missing-task"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(*store.board(), before);
}

#[test]
fn test_empty_titles_rejected_without_change() {
    let (mut store, _, _) = setup();
    let before = store.board().clone();

    assert!(matches!(
        store.apply(&AddColumn::new("")).unwrap_err(),
        BoardError::EmptyTitle
    ));
    assert!(matches!(
        store.apply(&AddColumn::new("  ")).unwrap_err(),
        BoardError::EmptyTitle
    ));
    assert_eq!(*store.board(), before);
}
