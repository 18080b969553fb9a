mod common;

use desktop_starter::slices::todos::{
    CreateTodoInput, TodoPriority, TodoStatus, TodoStore, UpdateTodoInput,
};

#[tokio::test]
async fn create_applies_defaults_and_lists_newest_first() {
    let (_dir, db) = common::temp_database().await;
    let store = TodoStore::new(db);

    assert!(store.list_todos().await.unwrap().is_empty());

    let first = store
        .create_todo(CreateTodoInput::new("Buy milk"))
        .await
        .unwrap();
    assert_eq!(first.status, TodoStatus::Pending);
    assert_eq!(first.priority, TodoPriority::Medium);
    assert_eq!(first.description, None);
    assert!(!first.created_at.is_empty());

    let second = store
        .create_todo(CreateTodoInput {
            title: "Write report".to_string(),
            description: Some("quarterly".to_string()),
            status: Some(TodoStatus::InProgress),
            priority: Some(TodoPriority::High),
            due_date: Some("2025-12-31".to_string()),
        })
        .await
        .unwrap();
    assert!(second.id > first.id);
    assert_eq!(second.due_date.as_deref(), Some("2025-12-31"));

    let ids: Vec<i32> = store
        .list_todos()
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let fetched = store.get_todo(second.id).await.unwrap().unwrap();
    assert_eq!(fetched, second);
    assert!(store.get_todo(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let (_dir, db) = common::temp_database().await;
    let store = TodoStore::new(db);
    let todo = store
        .create_todo(CreateTodoInput {
            description: Some("keep me".to_string()),
            ..CreateTodoInput::new("Original")
        })
        .await
        .unwrap();

    let updated = store
        .update_todo(
            todo.id,
            UpdateTodoInput {
                title: Some("Renamed".to_string()),
                priority: Some(TodoPriority::Low),
                ..UpdateTodoInput::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.priority, TodoPriority::Low);
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.status, TodoStatus::Pending);
    assert_eq!(updated.created_at, todo.created_at);

    let missing = store
        .update_todo(4242, UpdateTodoInput::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn toggle_cycles_between_completed_and_pending() {
    let (_dir, db) = common::temp_database().await;
    let store = TodoStore::new(db);
    let todo = store
        .create_todo(CreateTodoInput {
            status: Some(TodoStatus::InProgress),
            ..CreateTodoInput::new("Toggle me")
        })
        .await
        .unwrap();

    let toggled = store.toggle_todo_status(todo.id).await.unwrap().unwrap();
    assert_eq!(toggled.status, TodoStatus::Completed);

    let toggled = store.toggle_todo_status(todo.id).await.unwrap().unwrap();
    assert_eq!(toggled.status, TodoStatus::Pending);

    let toggled = store.toggle_todo_status(todo.id).await.unwrap().unwrap();
    assert_eq!(toggled.status, TodoStatus::Completed);

    assert!(store.toggle_todo_status(777).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let (_dir, db) = common::temp_database().await;
    let store = TodoStore::new(db);
    let todo = store
        .create_todo(CreateTodoInput::new("Short lived"))
        .await
        .unwrap();

    assert!(store.delete_todo(todo.id).await.unwrap());
    assert!(!store.delete_todo(todo.id).await.unwrap());
    assert!(store.list_todos().await.unwrap().is_empty());
}

#[tokio::test]
async fn stores_share_one_database_handle() {
    let (_dir, db) = common::temp_database().await;
    let writer = TodoStore::new(db.clone());
    let reader = TodoStore::new(db);

    writer
        .create_todo(CreateTodoInput::new("Seen by both"))
        .await
        .unwrap();
    assert_eq!(reader.list_todos().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_and_toggle_refresh_updated_at() {
    let (_dir, db) = common::temp_database().await;
    let store = TodoStore::new(db);
    let todo = store
        .create_todo(CreateTodoInput::new("Stamp me"))
        .await
        .unwrap();

    // Timestamps have one-second resolution.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let updated = store
        .update_todo(
            todo.id,
            UpdateTodoInput {
                title: Some("Stamped".to_string()),
                ..UpdateTodoInput::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_ne!(updated.updated_at, todo.updated_at);
    assert_eq!(updated.created_at, todo.created_at);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let toggled = store.toggle_todo_status(todo.id).await.unwrap().unwrap();
    assert_ne!(toggled.updated_at, updated.updated_at);
    assert_eq!(toggled.created_at, todo.created_at);
}

#[tokio::test]
async fn database_opens_at_its_configured_path() {
    let (dir, db) = common::temp_database().await;
    let expected = dir.path().join("nested").join("app.db");
    assert_eq!(db.path(), expected.to_string_lossy());
    assert!(expected.is_file());
}
