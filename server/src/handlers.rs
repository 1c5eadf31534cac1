//! HTTP routes for the todo resource.
//!
//! Handlers decode the path id and JSON body, call the service and map an
//! absent result to `ApiError::NotFound`. Every success is `200 OK`.

use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{request_id, trace_layer};
use crate::model::{DeleteConfirmation, Todo, TodoDraft, TodoId};
use crate::service::TodoService;

pub fn router(service: TodoService) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/health", get(health))
        .with_state(service)
        .layer(trace_layer())
        .layer(middleware::from_fn(request_id))
}

async fn create_todo(
    State(service): State<TodoService>,
    Json(draft): Json<TodoDraft>,
) -> Json<Todo> {
    Json(service.create_todo(draft).await)
}

async fn list_todos(State(service): State<TodoService>) -> Json<Vec<Todo>> {
    Json(service.get_todos().await)
}

async fn get_todo(
    State(service): State<TodoService>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    service.get_todo(id).await.map(Json).ok_or(ApiError::NotFound)
}

async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<TodoId>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    service
        .update_todo(id, draft)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<TodoId>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    if !service.delete_todo(id).await {
        return Err(ApiError::NotFound);
    }
    Ok(Json(DeleteConfirmation::default()))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
