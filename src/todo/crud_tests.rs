use super::*;
use crate::todo::storage::MemoryStore;

fn service_with(todos: Vec<Todo>) -> (Arc<MemoryStore>, TodoService) {
    let store = Arc::new(MemoryStore::new(todos));
    let service = TodoService::new(store.clone());
    (store, service)
}

fn ab() -> Vec<Todo> {
    vec![Todo::new(1, "a"), Todo::new(2, "b")]
}

#[tokio::test]
async fn test_list_is_idempotent() {
    let (_, service) = service_with(ab());

    let first = service.list().await.unwrap();
    let second = service.list().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, ab());
}

#[tokio::test]
async fn test_create_on_empty_list_uses_id_one() {
    let (store, service) = service_with(vec![]);

    let todo = service.create(TodoPayload::new("a")).await.unwrap();
    assert_eq!(todo, Todo::new(1, "a"));
    assert_eq!(store.snapshot().await, vec![Todo::new(1, "a")]);
}

#[tokio::test]
async fn test_create_appends_with_max_plus_one() {
    let (store, service) = service_with(vec![Todo::new(3, "x"), Todo::new(1, "y")]);

    let todo = service.create(TodoPayload::new("z")).await.unwrap();
    assert_eq!(todo.id, 4);

    let stored = store.snapshot().await;
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.last(), Some(&Todo::new(4, "z")));
}

#[tokio::test]
async fn test_create_stores_trimmed_text() {
    let (store, service) = service_with(vec![]);

    service.create(TodoPayload::new("  a  ")).await.unwrap();
    assert_eq!(store.snapshot().await, vec![Todo::new(1, "a")]);
}

#[tokio::test]
async fn test_create_rejects_blank_text_without_saving() {
    let (store, service) = service_with(ab());

    let result = service.create(TodoPayload::new("   ")).await;
    assert!(matches!(result, Err(TodoError::InvalidData)));
    assert_eq!(store.snapshot().await, ab());
}

#[tokio::test]
async fn test_update_replaces_text_only() {
    let (store, service) = service_with(ab());

    let todo = service.update("2", TodoPayload::new("c")).await.unwrap();
    assert_eq!(todo, Todo::new(2, "c"));
    assert_eq!(
        store.snapshot().await,
        vec![Todo::new(1, "a"), Todo::new(2, "c")]
    );
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (store, service) = service_with(ab());

    let result = service.update("99", TodoPayload::new("c")).await;
    assert!(matches!(result, Err(TodoError::NotFound(id)) if id == "99"));
    assert_eq!(store.snapshot().await, ab());
}

#[tokio::test]
async fn test_update_non_numeric_id_is_not_found() {
    let (_, service) = service_with(ab());

    let result = service.update("abc", TodoPayload::new("c")).await;
    assert!(matches!(result, Err(TodoError::NotFound(_))));
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let (_, service) = service_with(ab());

    let result = service.update("99", TodoPayload::new("")).await;
    assert!(matches!(result, Err(TodoError::InvalidData)));
}

#[tokio::test]
async fn test_delete_first_renumbers_rest() {
    let (store, service) = service_with(ab());

    let removed = service.delete("1").await.unwrap();
    assert_eq!(removed, Todo::new(1, "a"));
    assert_eq!(store.snapshot().await, vec![Todo::new(1, "b")]);
}

#[tokio::test]
async fn test_delete_keeps_contiguous_ids_and_order() {
    let todos = vec![
        Todo::new(1, "a"),
        Todo::new(2, "b"),
        Todo::new(3, "c"),
        Todo::new(4, "d"),
    ];
    let (store, service) = service_with(todos);

    service.delete("2").await.unwrap();

    let stored = store.snapshot().await;
    let ids: Vec<u64> = stored.iter().map(|t| t.id).collect();
    let texts: Vec<&str> = stored.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(texts, vec!["a", "c", "d"]);
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let (store, service) = service_with(ab());

    let result = service.delete("3").await;
    assert!(matches!(result, Err(TodoError::NotFound(_))));
    assert_eq!(store.snapshot().await, ab());
}

#[tokio::test]
async fn test_create_after_delete_stays_contiguous() {
    let (store, service) = service_with(ab());

    service.delete("1").await.unwrap();
    let todo = service.create(TodoPayload::new("c")).await.unwrap();

    assert_eq!(todo.id, 2);
    assert_eq!(
        store.snapshot().await,
        vec![Todo::new(1, "b"), Todo::new(2, "c")]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_do_not_lose_updates() {
    let (store, service) = service_with(vec![]);
    let service = Arc::new(service);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.create(TodoPayload::new(format!("todo {i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = store.snapshot().await;
    let mut ids: Vec<u64> = stored.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
}
