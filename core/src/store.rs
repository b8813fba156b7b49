//! View-state controller for the todo list.
//!
//! # Design
//! `TodoStore` owns a cached copy of the remote list plus the transient
//! input state (new-todo text and the single inline edit session). The
//! cached list is never patched locally: every mutation waits for the
//! service to acknowledge it and then replaces the list wholesale with a
//! fresh `get_all()`.
//!
//! A failed service call leaves the cached list and edit session as they
//! were. Nothing is retried or rolled back; the error is logged and handed
//! back to the caller.
//!
//! Every state change is published as a `Snapshot` on a `watch` channel so
//! a presentation layer can re-render.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::service::TodoService;
use crate::types::{NewTodo, Todo, TodoId};

/// Inline edit state. At most one todo is edited at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    pub editing_id: Option<TodoId>,
    pub edit_title: String,
}

impl EditSession {
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing_id == Some(id)
    }
}

/// Everything the presentation layer needs to render the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub edit: EditSession,
}

pub struct TodoStore<S> {
    service: S,
    todos: Vec<Todo>,
    new_title: String,
    edit: EditSession,
    changes: watch::Sender<Snapshot>,
}

impl<S: TodoService> TodoStore<S> {
    /// Create an empty store. Nothing is fetched until `load()`.
    pub fn new(service: S) -> Self {
        let (changes, _) = watch::channel(Snapshot::default());
        Self {
            service,
            todos: Vec::new(),
            new_title: String::new(),
            edit: EditSession::default(),
            changes,
        }
    }

    /// Create a store and perform the initial load.
    pub async fn connect(service: S) -> Result<Self, ApiError> {
        let mut store = Self::new(service);
        store.load().await?;
        Ok(store)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn new_title(&self) -> &str {
        &self.new_title
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.clone(),
            edit: self.edit.clone(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.changes.subscribe()
    }

    /// Bind the add-form input.
    pub fn set_new_title(&mut self, title: impl Into<String>) {
        self.new_title = title.into();
    }

    /// Bind the inline edit input.
    pub fn set_edit_title(&mut self, title: impl Into<String>) {
        self.edit.edit_title = title.into();
        self.publish();
    }

    /// Replace the cached list with the service's current list.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let todos = self
            .service
            .get_all()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to load todos"))?;
        debug!(count = todos.len(), "reloaded todo list");
        self.todos = todos;
        if let Some(id) = self.edit.editing_id {
            if !self.is_cached(id) {
                debug!(id, "edited todo is gone, dropping edit session");
                self.edit = EditSession::default();
            }
        }
        self.publish();
        Ok(())
    }

    /// Create a todo from `title`. Blank titles are ignored.
    pub async fn add(&mut self, title: &str) -> Result<(), ApiError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        let new = NewTodo {
            title: title.to_string(),
            completed: false,
        };
        let created = self
            .service
            .create(new)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to create todo"))?;
        debug!(id = ?created.id, "created todo");
        self.new_title.clear();
        self.load().await
    }

    /// `add` applied to the current add-form input.
    pub async fn submit(&mut self) -> Result<(), ApiError> {
        let title = self.new_title.clone();
        self.add(&title).await
    }

    pub async fn toggle(&mut self, todo: Todo) -> Result<(), ApiError> {
        let updated = Todo {
            completed: !todo.completed,
            ..todo
        };
        self.service
            .update(updated)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to toggle todo"))?;
        self.load().await
    }

    pub async fn remove(&mut self, id: TodoId) -> Result<(), ApiError> {
        self.service
            .delete(id)
            .await
            .inspect_err(|e| warn!(id, error = %e, "failed to delete todo"))?;
        self.load().await
    }

    /// Begin editing `todo`, replacing any session in progress.
    ///
    /// The todo must be in the cached list.
    pub fn start_edit(&mut self, todo: &Todo) -> Result<(), ApiError> {
        let id = todo.id.ok_or(ApiError::Unpersisted)?;
        if !self.is_cached(id) {
            return Err(ApiError::NotFound);
        }
        self.edit = EditSession {
            editing_id: Some(id),
            edit_title: todo.title.clone(),
        };
        self.publish();
        Ok(())
    }

    /// Persist the edit title for `id`. A blank title cancels the edit.
    ///
    /// `completed` comes from the cached list as it is now, not from when
    /// the edit started.
    pub async fn save_edit(&mut self, id: TodoId) -> Result<(), ApiError> {
        let title = self.edit.edit_title.trim();
        if title.is_empty() {
            self.cancel_edit();
            return Ok(());
        }
        let completed = self
            .todos
            .iter()
            .find(|t| t.id == Some(id))
            .map(|t| t.completed)
            .unwrap_or(false);
        let updated = Todo::new(id, title, completed);
        self.service
            .update(updated)
            .await
            .inspect_err(|e| warn!(id, error = %e, "failed to save edit"))?;
        self.edit = EditSession::default();
        self.publish();
        self.load().await
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSession::default();
        self.publish();
    }

    fn is_cached(&self, id: TodoId) -> bool {
        self.todos.iter().any(|t| t.id == Some(id))
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}
