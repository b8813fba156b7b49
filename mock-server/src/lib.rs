use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Accepts both partial bodies and the full record the client sends. A
/// body `id` is ignored; the path decides which todo is updated.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Todos keyed by id. Ids only grow, so map order is insertion order.
#[derive(Debug, Default)]
pub struct TodoTable {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

pub type Db = Arc<RwLock<TodoTable>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoTable::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn valid_title(title: &str) -> Result<String, StatusCode> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(title.to_string())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let table = db.read().await;
    Json(table.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let title = valid_title(&input.title)?;
    let mut table = db.write().await;
    table.last_id += 1;
    let todo = Todo {
        id: table.last_id,
        title,
        completed: input.completed,
    };
    table.todos.insert(todo.id, todo.clone());
    info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let table = db.read().await;
    table.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let title = input.title.as_deref().map(valid_title).transpose()?;
    let mut table = db.write().await;
    let todo = table.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    info!(id, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut table = db.write().await;
    table
        .todos
        .remove(&id)
        .map(|_| {
            info!(id, "deleted todo");
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "title": "Test", "completed": false}));
    }

    #[test]
    fn create_todo_defaults_completed_to_false() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_accepts_full_record() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"id":4,"title":"New title","completed":true}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("New title"));
        assert_eq!(input.completed, Some(true));
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(valid_title("  "), Err(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(valid_title(" walk dog "), Ok("walk dog".to_string()));
    }
}
