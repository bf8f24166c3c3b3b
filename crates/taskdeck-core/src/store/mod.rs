//! State Containers
//!
//! Each store owns its collection; presentation code reads snapshots and
//! subscribes to changes but never mutates the collection directly.

mod collection;
mod projects;
mod task_board;
mod team;
mod todo_store;

use std::cell::RefCell;
use std::rc::Rc;

pub use collection::{Collaborators, Messages, Placement, RemoteCollection, RemoteEntity};
pub use projects::ProjectStore;
pub use task_board::TaskBoard;
pub use team::TeamDirectory;
pub use todo_store::TodoStore;

type Callback<T> = Rc<dyn Fn(&[T])>;

/// Change subscribers. Callbacks receive the whole collection and must
/// not call back into the store that notifies them.
pub(crate) struct Listeners<T> {
    callbacks: RefCell<Vec<Callback<T>>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Listeners<T> {
    pub(crate) fn push(&self, callback: impl Fn(&[T]) + 'static) {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    pub(crate) fn emit(&self, items: &[T]) {
        let callbacks = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback(items);
        }
    }
}
