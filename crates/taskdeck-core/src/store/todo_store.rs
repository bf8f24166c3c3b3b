//! Local Todo Store
//!
//! Most-recent-first list of todos mirrored to durable key-value storage.
//! The whole list is rewritten on every change.

use std::cell::RefCell;
use std::rc::Rc;

use super::Listeners;
use crate::domain::{NewTodo, StorageError, Todo, TodoId};
use crate::repository::KeyValueStorage;

pub struct TodoStore {
    todos: RefCell<Vec<Todo>>,
    storage: Rc<dyn KeyValueStorage>,
    key: String,
    listeners: Listeners<Todo>,
}

impl TodoStore {
    /// Load the snapshot stored under `key`. Unreadable or corrupt
    /// snapshots are logged and the store starts empty.
    pub fn open(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let todos = match load_snapshot(storage.as_ref(), &key) {
            Ok(todos) => todos,
            Err(e) => {
                log::warn!("[todos] discarding stored snapshot under {}: {}", key, e);
                Vec::new()
            }
        };
        log::debug!("[todos] opened {} with {} todos", key, todos.len());
        Self {
            todos: RefCell::new(todos),
            storage,
            key,
            listeners: Listeners::default(),
        }
    }

    /// Prepend a new incomplete todo. Titles are not validated here;
    /// use `NewTodo::parse` (or `add_new`) first.
    pub fn add(&self, title: &str, description: Option<&str>) -> Todo {
        let todo = Todo::new(title, description.map(str::to_string));
        self.todos.borrow_mut().insert(0, todo.clone());
        self.changed();
        todo
    }

    pub fn add_new(&self, input: &NewTodo) -> Todo {
        self.add(input.title(), input.description())
    }

    /// Flip `completed`. Unknown ids are ignored.
    pub fn toggle(&self, id: &TodoId) {
        let found = {
            let mut todos = self.todos.borrow_mut();
            match todos.iter_mut().find(|t| &t.id == id) {
                Some(todo) => {
                    todo.completed = !todo.completed;
                    true
                }
                None => false,
            }
        };
        if found {
            self.changed();
        }
    }

    /// Remove permanently. Unknown ids are ignored.
    pub fn delete(&self, id: &TodoId) {
        let removed = {
            let mut todos = self.todos.borrow_mut();
            let before = todos.len();
            todos.retain(|t| &t.id != id);
            todos.len() != before
        };
        if removed {
            self.changed();
        }
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn get(&self, id: &TodoId) -> Option<Todo> {
        self.todos.borrow().iter().find(|t| &t.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.todos.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.borrow().is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.todos.borrow().iter().filter(|t| !t.completed).count()
    }

    /// Todos still to do, in list order
    pub fn active_list(&self) -> Vec<Todo> {
        self.todos.borrow().iter().filter(|t| !t.completed).cloned().collect()
    }

    /// Completed todos in list order
    pub fn completed_list(&self) -> Vec<Todo> {
        self.todos.borrow().iter().filter(|t| t.completed).cloned().collect()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn subscribe(&self, callback: impl Fn(&[Todo]) + 'static) {
        self.listeners.push(callback);
    }

    fn changed(&self) {
        let todos = self.todos.borrow();
        if let Err(e) = self.persist(&todos) {
            log::error!("[todos] failed to persist {} todos: {}", todos.len(), e);
        }
        self.listeners.emit(&todos);
    }

    fn persist(&self, todos: &[Todo]) -> Result<(), StorageError> {
        let json = serde_json::to_string(todos)?;
        self.storage.save(&self.key, &json)
    }
}

fn load_snapshot(storage: &dyn KeyValueStorage, key: &str) -> Result<Vec<Todo>, StorageError> {
    match storage.load(key)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::repository::MemoryStorage;
    use std::cell::Cell;

    const KEY: &str = "todos-test";

    fn open_store() -> (TodoStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = TodoStore::open(Rc::new(storage.clone()), KEY);
        (store, storage)
    }

    fn assert_counts_consistent(store: &TodoStore) {
        assert_eq!(store.active_count() + store.completed_list().len(), store.len());
    }

    #[test]
    fn test_add_to_empty_store() {
        let (store, _) = open_store();
        store.add("Buy milk", None);

        let todos = store.todos();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Buy milk");
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_add_prepends() {
        let (store, _) = open_store();
        store.add("first", None);
        let second = store.add("second", Some("details"));

        let todos = store.todos();
        assert_eq!(todos[0].id, second.id);
        assert_eq!(todos[0].description.as_deref(), Some("details"));
        assert_eq!(todos[1].title, "first");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (store, _) = open_store();
        let todo = store.add("Walk dog", None);

        store.toggle(&todo.id);
        assert!(store.get(&todo.id).unwrap().completed);
        store.toggle(&todo.id);
        assert!(!store.get(&todo.id).unwrap().completed);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let (store, storage) = open_store();
        store.add("keep", None);
        let before = store.todos();
        let snapshot = storage.raw(KEY);

        let missing = uuid::Uuid::new_v4();
        store.toggle(&missing);
        store.delete(&missing);

        assert_eq!(store.todos(), before);
        assert_eq!(storage.raw(KEY), snapshot);
    }

    #[test]
    fn test_delete_removes() {
        let (store, _) = open_store();
        let a = store.add("a", None);
        let b = store.add("b", None);

        store.delete(&a.id);
        let todos = store.todos();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, b.id);
    }

    #[test]
    fn test_derived_views() {
        let (store, _) = open_store();
        let a = store.add("a", None);
        store.add("b", None);
        let c = store.add("c", None);
        store.toggle(&a.id);
        store.toggle(&c.id);

        assert_eq!(store.active_count(), 1);
        let completed: Vec<_> = store.completed_list().into_iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![c.id, a.id]);
        let active: Vec<_> = store.active_list().into_iter().map(|t| t.title).collect();
        assert_eq!(active, vec!["b"]);
    }

    #[test]
    fn test_counts_stay_consistent_across_mutations() {
        let (store, _) = open_store();
        assert_counts_consistent(&store);

        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(store.add(&format!("todo {}", i), None).id);
            assert_counts_consistent(&store);
        }
        for id in ids.iter().step_by(2) {
            store.toggle(id);
            assert_counts_consistent(&store);
        }
        store.delete(&ids[0]);
        assert_counts_consistent(&store);
        store.delete(&ids[1]);
        assert_counts_consistent(&store);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_blank_titles_never_reach_the_store() {
        let (store, _) = open_store();
        for title in ["", "   "] {
            match NewTodo::parse(title, "") {
                Ok(input) => {
                    store.add_new(&input);
                }
                Err(e) => assert_eq!(e, ValidationError::EmptyTitle),
            }
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_reloads_into_fresh_store() {
        let (store, storage) = open_store();
        let a = store.add("a", Some("first"));
        store.add("b", None);
        store.toggle(&a.id);

        let reopened = TodoStore::open(Rc::new(storage), KEY);
        assert_eq!(reopened.todos(), store.todos());
    }

    #[test]
    fn test_corrupt_snapshot_opens_empty() {
        let storage = MemoryStorage::new();
        storage.save(KEY, "{not json").unwrap();

        let store = TodoStore::open(Rc::new(storage), KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let (store, storage) = open_store();
        storage.fail_writes(true);

        store.add("unsaved", None);
        assert_eq!(store.len(), 1);
        assert_eq!(storage.raw(KEY), None);
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let (store, _) = open_store();
        let seen = Rc::new(Cell::new(0usize));
        let last_len = Rc::new(Cell::new(0usize));
        {
            let seen = seen.clone();
            let last_len = last_len.clone();
            store.subscribe(move |todos| {
                seen.set(seen.get() + 1);
                last_len.set(todos.len());
            });
        }

        let todo = store.add("a", None);
        store.toggle(&todo.id);
        store.delete(&todo.id);

        assert_eq!(seen.get(), 3);
        assert_eq!(last_len.get(), 0);
    }
}
