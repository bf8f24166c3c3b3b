//! Browser Adapters
//!
//! `localStorage` for the todo snapshot and toasts for notifications.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use taskdeck_core::domain::StorageError;
use taskdeck_core::repository::KeyValueStorage;
use taskdeck_core::{Level, LogNotifier, Notifier};

use crate::store::{store_push_toast, store_remove_toast, AppStore, Toast};

/// How long a toast stays on screen
const TOAST_TTL_MS: u32 = 4000;

/// Window `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStorage for WebStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Shows notifications as expiring toasts and logs them
pub struct ToastNotifier {
    store: AppStore,
    next_id: Cell<u64>,
    log: LogNotifier,
}

impl ToastNotifier {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            next_id: Cell::new(0),
            log: LogNotifier,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.log.notify(level, message);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        store_push_toast(&self.store, Toast {
            id,
            level,
            message: message.to_string(),
        });

        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            store_remove_toast(&store, id);
        });
    }
}
