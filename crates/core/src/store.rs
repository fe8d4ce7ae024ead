//! Process-wide todo list state with copy-on-write snapshots.

use crate::todo::{Todo, TodoId};
use crate::TodoSource;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of todos accepted from a fetched batch.
pub const FETCH_BATCH_LIMIT: usize = 10;

/// Fixed message surfaced when the initial fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch todos";

/// Mutable todo-list state.
///
/// Every mutation installs a freshly allocated list, so observers can hold a
/// [`TodoStore::snapshot`] and detect change with `Arc::ptr_eq` instead of a
/// deep comparison. The store itself lives for the application lifetime;
/// there is no teardown.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Arc<[Todo]>,
    is_loading: bool,
    error: Option<String>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            todos: Vec::new().into(),
            is_loading: false,
            error: None,
        }
    }

    /// Current list, most-recent-first for locally added items.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Cheap shareable snapshot of the current list.
    pub fn snapshot(&self) -> Arc<[Todo]> {
        Arc::clone(&self.todos)
    }

    /// Whether an initial fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Last fetch failure, if any. Cleared when a fetch starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the list with a batch from `source`.
    ///
    /// Exactly one fetch attempt. On success the whole list is replaced
    /// (no merge, no de-duplication) with the batch truncated to
    /// [`FETCH_BATCH_LIMIT`] items in server order. On failure the list is
    /// left untouched and only the `error` flag is raised; the failure never
    /// reaches the caller. Repeated calls each re-fetch independently.
    pub fn fetch_initial(&mut self, source: &dyn TodoSource) {
        self.is_loading = true;
        self.error = None;

        match source.fetch_batch() {
            Ok(mut batch) => {
                batch.truncate(FETCH_BATCH_LIMIT);
                debug!(count = batch.len(), "loaded initial todo batch");
                self.todos = batch.into();
                self.is_loading = false;
            }
            Err(err) => {
                warn!("initial todo fetch failed: {err}");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.is_loading = false;
            }
        }
    }

    /// Prepend a new todo built from `title`.
    ///
    /// The title is trimmed first; a title that is empty after trimming is
    /// rejected here, unconditionally, and nothing is stored. Returns the id
    /// of the new todo when one was added.
    pub fn add_todo(&mut self, title: &str) -> Option<TodoId> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!("rejected empty todo title");
            return None;
        }

        let todo = Todo::new(TodoId::from_wall_clock(), trimmed);
        let id = todo.id;
        debug!(id = id.0, title = trimmed, "added todo");

        let mut next = Vec::with_capacity(self.todos.len() + 1);
        next.push(todo);
        next.extend_from_slice(&self.todos);
        self.todos = next.into();
        Some(id)
    }

    /// Flip `completed` on the todo matching `id`. Silent no-op on a miss.
    pub fn toggle_todo(&mut self, id: TodoId) -> bool {
        if !self.todos.iter().any(|t| t.id == id) {
            debug!(id = id.0, "toggle on unknown todo id");
            return false;
        }

        let next: Vec<Todo> = self
            .todos
            .iter()
            .map(|t| {
                if t.id == id {
                    let mut flipped = t.clone();
                    flipped.completed = !flipped.completed;
                    flipped
                } else {
                    t.clone()
                }
            })
            .collect();
        self.todos = next.into();
        true
    }

    /// Remove the todo matching `id`. Silent no-op on a miss.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        if !self.todos.iter().any(|t| t.id == id) {
            debug!(id = id.0, "delete on unknown todo id");
            return false;
        }

        let next: Vec<Todo> = self
            .todos
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.todos = next.into();
        true
    }
}
