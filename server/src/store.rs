//! In-memory record storage.
//!
//! # Design
//! `TodoStore` is plain data access: an insertion-ordered `Vec<Todo>` plus
//! the id and lookup rules. It has no locking and no policy; the service
//! layer owns the shared handle and serializes access to it.
//!
//! All lookups are linear and first-match.

use crate::model::{Todo, TodoDraft, TodoId};

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record and return it.
    ///
    /// The id is `len + 1`. After a delete this reuses ids, and deleting a
    /// record other than the last one can hand out an id that is still live
    /// (lookups then resolve to the older record). Kept for compatibility
    /// with existing clients; see DESIGN.md "Known defects".
    pub fn create(&mut self, draft: TodoDraft) -> Todo {
        let id = self.todos.len() as TodoId + 1;
        let todo = Todo::from_draft(id, draft);
        self.todos.push(todo.clone());
        todo
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Overwrite the title of the first record with `id`. `id` and
    /// `completed` are left untouched.
    pub fn update_by_id(&mut self, id: TodoId, draft: TodoDraft) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.title = draft.title;
        Some(todo.clone())
    }

    /// Remove the first record with `id`. Remaining ids are not renumbered.
    pub fn delete_by_id(&mut self, id: TodoId) -> bool {
        match self.todos.iter().position(|todo| todo.id == id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Record count, reported by the service's debug events. It is also
    /// the base of the next id.
    pub(crate) fn len(&self) -> usize {
        self.todos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TodoDraft {
        TodoDraft::new(title)
    }

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let mut store = TodoStore::new();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|t| store.create(draft(t)).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn create_then_get_returns_same_record() {
        let mut store = TodoStore::new();
        let created = store.create(draft("Buy groceries"));
        let fetched = store.get_by_id(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Buy groceries");
        assert!(!fetched.completed);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        store.create(draft("A"));
        store.create(draft("B"));
        let _ = store.get_by_id(1);
        store.create(draft("C"));
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn list_is_a_snapshot() {
        let mut store = TodoStore::new();
        store.create(draft("A"));
        let mut snapshot = store.list();
        snapshot.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_changes_title_only() {
        let mut store = TodoStore::new();
        store.create(draft("A"));
        store.create(draft("B"));
        let updated = store.update_by_id(2, draft("B2")).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.title, "B2");
        assert!(!updated.completed);
        assert_eq!(store.get_by_id(2).unwrap().title, "B2");
        assert_eq!(store.get_by_id(1).unwrap().title, "A");
    }

    #[test]
    fn update_keeps_position_in_list() {
        let mut store = TodoStore::new();
        store.create(draft("A"));
        store.create(draft("B"));
        store.update_by_id(1, draft("A2"));
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A2", "B"]);
    }

    #[test]
    fn missing_ids_are_absent() {
        let mut store = TodoStore::new();
        assert!(store.get_by_id(1).is_none());
        assert!(store.update_by_id(1, draft("x")).is_none());
        assert!(!store.delete_by_id(1));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = TodoStore::new();
        store.create(draft("A"));
        store.create(draft("B"));
        store.create(draft("C"));
        assert!(store.delete_by_id(2));
        assert!(store.get_by_id(2).is_none());
        let ids: Vec<_> = store.list().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(!store.delete_by_id(2));
    }

    #[test]
    fn id_is_reused_after_deleting_only_record() {
        let mut store = TodoStore::new();
        let first = store.create(draft("first"));
        assert!(store.delete_by_id(first.id));
        let second = store.create(draft("second"));
        assert_eq!(second.id, 1);
    }

    #[test]
    fn count_based_ids_can_collide_and_resolve_first_match() {
        let mut store = TodoStore::new();
        store.create(draft("one"));
        store.create(draft("two"));
        assert!(store.delete_by_id(1));
        let third = store.create(draft("three"));
        assert_eq!(third.id, 2);

        assert_eq!(store.get_by_id(2).unwrap().title, "two");
        assert_eq!(store.update_by_id(2, draft("two*")).unwrap().title, "two*");
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["two*", "three"]);

        assert!(store.delete_by_id(2));
        assert_eq!(store.get_by_id(2).unwrap().title, "three");
    }
}
