//! Remote Collection
//!
//! Cache of one remote table. Mutations go to the data source first and
//! are applied in memory only once it acknowledges them. Failures are
//! logged, reported through the notifier and leave the cache unchanged.
//!
//! No borrow of the cache is held while a request is in flight, so
//! overlapping requests are allowed and the last response to arrive wins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::Listeners;
use crate::domain::{Entity, RemoteResult};
use crate::identity::Identity;
use crate::notify::Notifier;
use crate::repository::{insert_row, select_rows, update_rows, DataSource, EqFilter, Order, Table};

/// Where newly created rows go in the cached list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Append,
    Prepend,
}

/// User-facing messages for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: Option<&'static str>,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

/// An entity stored in a remote table
pub trait RemoteEntity: Entity<Id = String> + DeserializeOwned + 'static {
    /// Insert payload (without `created_by`)
    type New: Serialize;
    /// Partial update payload
    type Patch: Serialize;

    const TABLE: Table;
    const ORDER: Order;
    const PLACEMENT: Placement;
    const MESSAGES: Messages;

    fn apply_patch(&mut self, patch: &Self::Patch);
}

/// Collaborators shared by every remote-backed store
#[derive(Clone)]
pub struct Collaborators {
    pub source: Rc<dyn DataSource>,
    pub identity: Rc<dyn Identity>,
    pub notifier: Rc<dyn Notifier>,
}

pub struct RemoteCollection<T: RemoteEntity> {
    rows: RefCell<Vec<T>>,
    loading: Cell<bool>,
    deps: Collaborators,
    listeners: Listeners<T>,
}

impl<T: RemoteEntity> RemoteCollection<T> {
    /// Empty and loading until the first `fetch_all` completes
    pub fn new(deps: Collaborators) -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            loading: Cell::new(true),
            deps,
            listeners: Listeners::default(),
        }
    }

    /// Replace the cache with every row, in the table's default order.
    /// On failure the previous rows stay available.
    pub async fn fetch_all(&self) -> bool {
        let result = select_rows::<T>(self.deps.source.as_ref(), T::TABLE, Some(T::ORDER)).await;
        let ok = match result {
            Ok(rows) => {
                log::debug!("[{}] fetched {} rows", T::TABLE.as_str(), rows.len());
                *self.rows.borrow_mut() = rows;
                true
            }
            Err(e) => {
                log::error!("[{}] fetch failed: {}", T::TABLE.as_str(), e);
                self.deps.notifier.error(T::MESSAGES.load_failed);
                false
            }
        };
        self.loading.set(false);
        self.changed();
        ok
    }

    pub async fn refetch(&self) -> bool {
        self.fetch_all().await
    }

    /// Insert on behalf of the current actor. Without one nothing is sent.
    pub async fn create(&self, new: &T::New) -> Option<T> {
        let Some(actor) = self.deps.identity.current_actor() else {
            log::debug!("[{}] create skipped: no signed-in actor", T::TABLE.as_str());
            return None;
        };
        match self.insert_stamped(new, actor).await {
            Ok(created) => {
                {
                    let mut rows = self.rows.borrow_mut();
                    match T::PLACEMENT {
                        Placement::Append => rows.push(created.clone()),
                        Placement::Prepend => rows.insert(0, created.clone()),
                    }
                }
                self.changed();
                self.deps.notifier.success(T::MESSAGES.created);
                Some(created)
            }
            Err(e) => {
                log::error!("[{}] create failed: {}", T::TABLE.as_str(), e);
                self.deps.notifier.error(T::MESSAGES.create_failed);
                None
            }
        }
    }

    /// Send `patch` for the row with `id`, then merge it into the cached row
    pub async fn update(&self, id: &str, patch: &T::Patch) -> bool {
        let result =
            update_rows(self.deps.source.as_ref(), T::TABLE, &EqFilter::id(id), patch).await;
        match result {
            Ok(()) => {
                if let Some(row) = self.rows.borrow_mut().iter_mut().find(|r| r.id() == id) {
                    row.apply_patch(patch);
                }
                self.changed();
                if let Some(message) = T::MESSAGES.updated {
                    self.deps.notifier.success(message);
                }
                true
            }
            Err(e) => {
                log::error!("[{}] update of {} failed: {}", T::TABLE.as_str(), id, e);
                self.deps.notifier.error(T::MESSAGES.update_failed);
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.deps.source.delete(T::TABLE, &EqFilter::id(id)).await {
            Ok(()) => {
                self.rows.borrow_mut().retain(|r| r.id() != id);
                self.changed();
                self.deps.notifier.success(T::MESSAGES.deleted);
                true
            }
            Err(e) => {
                log::error!("[{}] delete of {} failed: {}", T::TABLE.as_str(), id, e);
                self.deps.notifier.error(T::MESSAGES.delete_failed);
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.borrow().iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Run `f` over the cached rows without cloning them
    pub fn with_rows<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.rows.borrow())
    }

    pub fn subscribe(&self, callback: impl Fn(&[T]) + 'static) {
        self.listeners.push(callback);
    }

    async fn insert_stamped(&self, new: &T::New, actor: String) -> RemoteResult<T> {
        let mut row = serde_json::to_value(new)?;
        if let Some(fields) = row.as_object_mut() {
            fields.insert("created_by".to_string(), Value::String(actor));
        }
        insert_row(self.deps.source.as_ref(), T::TABLE, &row).await
    }

    fn changed(&self) {
        self.listeners.emit(&self.rows.borrow());
    }
}
