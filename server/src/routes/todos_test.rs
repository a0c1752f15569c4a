use super::*;
use crate::state::test_helpers::{seeded_app_state, test_app_state};
use todos::TodoStatus;

fn query(statuses: Option<&str>) -> Query<ListTodosQuery> {
    Query(ListTodosQuery { statuses: statuses.map(str::to_owned) })
}

#[test]
fn todo_error_to_status_maps_not_found() {
    assert_eq!(todo_error_to_status(TodoError::NotFound(1)), StatusCode::NOT_FOUND);
}

#[test]
fn todo_error_to_status_maps_empty_body() {
    assert_eq!(todo_error_to_status(TodoError::EmptyBody), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_without_statuses_returns_everything() {
    let (state, seeded) = seeded_app_state(&["a", "b", "c"]).await;
    let Json(todos) = list_todos(State(state), query(None)).await.unwrap();
    assert_eq!(todos, seeded);
}

#[tokio::test]
async fn list_with_one_status_returns_subset() {
    let (state, seeded) = seeded_app_state(&["a", "b", "c"]).await;
    let Json(todos) = list_todos(State(state), query(Some("completed"))).await.unwrap();
    assert_eq!(todos, vec![seeded[1].clone()]);
    assert!(todos.iter().all(|t| t.status == TodoStatus::Completed));
}

#[tokio::test]
async fn list_with_unknown_status_is_bad_request() {
    let state = test_app_state();
    let err = list_todos(State(state), query(Some("pending,archived"))).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_returns_created_pending_todo() {
    let state = test_app_state();
    let (status, Json(todo)) = create_todo(State(state.clone()), Json(CreateTodoBody { body: "ship it".to_owned() }))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(todo.body, "ship it");
    assert_eq!(todo.status, TodoStatus::Pending);
    assert_eq!(state.todos.read().await.len(), 1);
}

#[tokio::test]
async fn create_blank_body_is_bad_request() {
    let state = test_app_state();
    let err = create_todo(State(state.clone()), Json(CreateTodoBody { body: "  ".to_owned() }))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
    assert!(state.todos.read().await.is_empty());
}

#[tokio::test]
async fn update_status_returns_updated_todo() {
    let (state, seeded) = seeded_app_state(&["a"]).await;
    let id = seeded[0].id;
    let Json(todo) = update_todo_status(
        State(state),
        Path(id),
        Json(UpdateTodoStatusBody { status: TodoStatus::Completed }),
    )
    .await
    .unwrap();
    assert_eq!(todo.id, id);
    assert_eq!(todo.status, TodoStatus::Completed);
}

#[tokio::test]
async fn update_status_unknown_id_is_not_found() {
    let state = test_app_state();
    let err = update_todo_status(
        State(state),
        Path(404),
        Json(UpdateTodoStatusBody { status: TodoStatus::Pending }),
    )
    .await
    .unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_acknowledges_and_removes_only_that_todo() {
    let (state, seeded) = seeded_app_state(&["a", "b", "c"]).await;
    let Json(ack) = delete_todo(State(state.clone()), Path(seeded[0].id)).await.unwrap();
    assert!(ack.ok);
    let Json(remaining) = list_todos(State(state), query(None)).await.unwrap();
    assert_eq!(remaining, seeded[1..].to_vec());
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let (state, seeded) = seeded_app_state(&["a"]).await;
    delete_todo(State(state.clone()), Path(seeded[0].id)).await.unwrap();
    let err = delete_todo(State(state), Path(seeded[0].id)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
