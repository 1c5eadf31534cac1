//! Use-case layer between the HTTP handlers and the store.
//!
//! # Design
//! `TodoService` forwards each call to the store with the same inputs,
//! outputs and absence conventions (`Option` / `bool`). It never turns
//! absence into an error; that is the handlers' job. The only thing it adds
//! is the lock: reads share, writes are exclusive, so every operation is
//! atomic against the single store even on a multi-threaded runtime.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{Todo, TodoDraft, TodoId};
use crate::store::TodoStore;

#[derive(Clone, Debug)]
pub struct TodoService {
    store: Arc<RwLock<TodoStore>>,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn create_todo(&self, draft: TodoDraft) -> Todo {
        let mut store = self.store.write().await;
        let todo = store.create(draft);
        debug!(id = todo.id, count = store.len(), "todo created");
        todo
    }

    pub async fn get_todos(&self) -> Vec<Todo> {
        let store = self.store.read().await;
        debug!(count = store.len(), "todos listed");
        store.list()
    }

    pub async fn get_todo(&self, id: TodoId) -> Option<Todo> {
        let todo = self.store.read().await.get_by_id(id);
        debug!(id, found = todo.is_some(), "todo fetched");
        todo
    }

    pub async fn update_todo(&self, id: TodoId, draft: TodoDraft) -> Option<Todo> {
        let todo = self.store.write().await.update_by_id(id, draft);
        debug!(id, found = todo.is_some(), "todo updated");
        todo
    }

    pub async fn delete_todo(&self, id: TodoId) -> bool {
        let mut store = self.store.write().await;
        let deleted = store.delete_by_id(id);
        debug!(id, deleted, count = store.len(), "todo deleted");
        deleted
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}
