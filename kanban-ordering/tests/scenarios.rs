//! Integration tests for drag-and-drop placement scenarios

use kanban_ordering::{
    calculate_position, get_new_task_position, ColumnId, DropPosition, OrderingEngine,
    OrderingError, PlacementRequest, Priority, Task, TaskId,
};

fn task(id: &str, column: &str, position: f64) -> Task {
    Task::new(format!("Task {id}"), column, position).with_id(id)
}

/// Ids of a column in display order
fn column_order(tasks: &[Task], column: &str) -> Vec<String> {
    let mut column: Vec<&Task> = tasks.iter().filter(|t| t.column_id == column).collect();
    column.sort_by(|a, b| a.position.total_cmp(&b.position));
    column.iter().map(|t| t.id.to_string()).collect()
}

#[test]
fn test_empty_column_bootstrap() {
    assert_eq!(get_new_task_position(&[], &ColumnId::from("colA")), 1000.0);
}

#[test]
fn test_move_to_first() {
    let tasks = vec![task("1", "col1", 1000.0), task("2", "col1", 2000.0)];

    let result = calculate_position(&tasks, &PlacementRequest::first("2", "col1")).unwrap();

    assert_eq!(result.new_position, 500.0);
    assert!(!result.needs_rebalancing);
    assert_eq!(column_order(&result.updated_tasks, "col1"), vec!["2", "1"]);
}

#[test]
fn test_move_to_last() {
    let tasks = vec![task("1", "col1", 1000.0), task("2", "col1", 2000.0)];

    let result = calculate_position(&tasks, &PlacementRequest::last("1", "col1")).unwrap();

    assert_eq!(result.new_position, 3000.0);
    assert!(!result.needs_rebalancing);
    assert_eq!(column_order(&result.updated_tasks, "col1"), vec!["2", "1"]);
}

#[test]
fn test_forced_rebalance() {
    let tasks = vec![
        task("1", "col1", 1.0),
        task("2", "col1", 1.0001),
        task("3", "col2", 1000.0),
    ];

    let result = calculate_position(&tasks, &PlacementRequest::before("3", "col1", "2")).unwrap();

    assert!(result.needs_rebalancing);
    assert_eq!(column_order(&result.updated_tasks, "col1"), vec!["1", "3", "2"]);

    let mut positions: Vec<f64> = result
        .updated_tasks
        .iter()
        .filter(|t| t.column_id == "col1")
        .map(|t| t.position)
        .collect();
    positions.sort_by(f64::total_cmp);
    assert_eq!(positions, vec![1000.0, 2000.0, 3000.0]);
    assert_eq!(result.new_position, 2000.0);

    // Every task of the column has to be persisted
    let writes = result.write_set(&tasks);
    assert_eq!(writes.len(), 3);
    assert!(writes.iter().all(|w| w.column_id == "col1"));
}

#[test]
fn test_cross_column_move() {
    let tasks = vec![
        task("a", "todo", 1000.0),
        task("b", "todo", 2000.0),
        task("c", "todo", 3000.0),
        task("x", "done", 1000.0),
    ];

    let result = calculate_position(&tasks, &PlacementRequest::after("b", "done", "x")).unwrap();

    let moved = result.task(&TaskId::from("b")).unwrap();
    assert_eq!(moved.column_id, "done");
    assert_eq!(moved.position, 2000.0);

    assert_eq!(column_order(&result.updated_tasks, "todo"), vec!["a", "c"]);
    assert_eq!(column_order(&result.updated_tasks, "done"), vec!["x", "b"]);

    // The source column keeps its positions untouched
    assert_eq!(result.task(&TaskId::from("a")).unwrap().position, 1000.0);
    assert_eq!(result.task(&TaskId::from("c")).unwrap().position, 3000.0);
}

#[test]
fn test_payload_fields_pass_through() {
    let tasks = vec![
        task("1", "col1", 1000.0)
            .with_priority(Priority::High)
            .with_status("in-progress")
            .with_due_date("2024-06-01")
            .with_description("keep me"),
        task("2", "col1", 2000.0),
    ];

    let result = calculate_position(&tasks, &PlacementRequest::last("1", "col1")).unwrap();
    let moved = result.task(&TaskId::from("1")).unwrap();

    assert_eq!(moved.priority, Some(Priority::High));
    assert_eq!(moved.status.as_deref(), Some("in-progress"));
    assert_eq!(moved.due_date.as_deref(), Some("2024-06-01"));
    assert_eq!(moved.description.as_deref(), Some("keep me"));
    assert_eq!(moved.title, "Task 1");
}

#[test]
fn test_input_snapshot_is_not_mutated() {
    let tasks = vec![task("1", "col1", 1.0), task("2", "col1", 1.0001)];
    let before = tasks.clone();

    let result = calculate_position(&tasks, &PlacementRequest::after("1", "col1", "2")).unwrap();
    assert_ne!(result.updated_tasks, tasks);
    assert_eq!(tasks, before);
}

#[test]
fn test_failing_placement_touches_nothing() {
    let tasks = vec![task("1", "col1", 1000.0), task("2", "col1", 2000.0)];

    let err = calculate_position(
        &tasks,
        &PlacementRequest::new("1", "col1", DropPosition::After),
    )
    .unwrap_err();
    assert!(matches!(err, OrderingError::InvalidArgument { .. }));

    let err = calculate_position(&tasks, &PlacementRequest::before("1", "col1", "zzz")).unwrap_err();
    assert!(matches!(err, OrderingError::NotFound { .. }));
    assert_eq!(err.to_string(), "target task not found: zzz");
}

#[test]
fn test_repeated_bisection_eventually_rebalances() {
    // Keep dropping a fresh card right after "a" until the gap runs out
    let engine = OrderingEngine::default();
    let mut tasks = vec![task("a", "col1", 1000.0), task("b", "col1", 2000.0)];
    let mut rebalanced_after = None;

    for round in 0..64 {
        let id = format!("n{round}");
        let new_task = engine.create_task(&tasks, id.clone(), "inbox").with_id(id.as_str());
        tasks.push(new_task);

        let result = engine
            .calculate_position(&tasks, &PlacementRequest::after(id.as_str(), "col1", "a"))
            .unwrap();
        tasks = result.updated_tasks;

        let order = column_order(&tasks, "col1");
        assert_eq!(order[1], id, "round {round} must land right after 'a'");

        if result.needs_rebalancing {
            rebalanced_after = Some(round);
            break;
        }
    }

    // Round k splits a gap of 1000 / 2^k; at k = 19 each half would be
    // 1000 / 2^20, the first value at or below 0.001
    assert_eq!(rebalanced_after, Some(19));

    let positions: Vec<f64> = {
        let mut p: Vec<f64> = tasks
            .iter()
            .filter(|t| t.column_id == "col1")
            .map(|t| t.position)
            .collect();
        p.sort_by(f64::total_cmp);
        p
    };
    let expected: Vec<f64> = (1..=positions.len()).map(|i| i as f64 * 1000.0).collect();
    assert_eq!(positions, expected);
}
