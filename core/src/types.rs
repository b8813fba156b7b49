//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the backing service.
pub type TodoId = i64;

/// A single todo item.
///
/// `id` is `None` until the service has persisted the record; once set it
/// never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: Some(id),
            title: title.into(),
            completed,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Request payload for creating a new todo. The service assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
