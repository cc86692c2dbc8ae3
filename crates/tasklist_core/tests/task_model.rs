use tasklist_core::{Task, TaskId, TaskValidationError};

#[test]
fn new_task_sets_defaults() {
    let task = Task::new("buy milk").unwrap();

    assert!(!task.id.as_str().is_empty());
    assert_eq!(task.text, "buy milk");
    assert!(!task.done);
}

#[test]
fn new_task_keeps_surrounding_whitespace() {
    let task = Task::new("  buy milk  ").unwrap();
    assert_eq!(task.text, "  buy milk  ");
}

#[test]
fn new_task_rejects_whitespace_only_text() {
    assert_eq!(
        Task::new("   ").unwrap_err(),
        TaskValidationError::EmptyText
    );
    assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyText);
}

#[test]
fn with_id_rejects_empty_id() {
    let err = Task::with_id(TaskId::from(""), "valid text").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyId);
}

#[test]
fn generated_ids_are_distinct() {
    let first = Task::new("one").unwrap();
    let second = Task::new("two").unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn toggle_is_an_involution() {
    let mut task = Task::new("walk dog").unwrap();

    task.toggle();
    assert!(task.done);

    task.toggle();
    assert!(!task.done);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut task = Task::with_id(TaskId::from("1700000000000"), "ship release").unwrap();
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "1700000000000");
    assert_eq!(json["text"], "ship release");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn legacy_timestamp_ids_deserialize_unchanged() {
    // Lists written by earlier app versions used Date-derived string ids.
    let decoded: Task =
        serde_json::from_str(r#"{"id":"1689875300123","text":"old entry","done":false}"#).unwrap();
    assert_eq!(decoded.id, TaskId::from("1689875300123"));
    assert!(decoded.validate().is_ok());
}
