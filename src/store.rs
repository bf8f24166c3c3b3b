//! Global Application State Store
//!
//! Reactive mirror of the core stores, using Leptos reactive_stores for
//! fine-grained reactivity. The core stores stay the owners of the data;
//! their change listeners copy each new collection in here.

use leptos::prelude::*;
use reactive_stores::Store;
use taskdeck_core::domain::{Project, Task, TeamMember, Todo};
use taskdeck_core::Level;

/// A visible notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local todos, most recent first
    pub todos: Vec<Todo>,
    /// Board tasks in fetch order
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub members: Vec<TeamMember>,
    pub toasts: Vec<Toast>,
    pub board_loading: bool,
    pub projects_loading: bool,
    pub team_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            board_loading: true,
            projects_loading: true,
            team_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_todos(store: &AppStore, todos: &[Todo]) {
    *store.todos().write() = todos.to_vec();
}

/// Replace tasks; the first delivery also ends the loading state
pub fn store_set_tasks(store: &AppStore, tasks: &[Task]) {
    *store.tasks().write() = tasks.to_vec();
    *store.board_loading().write() = false;
}

pub fn store_set_projects(store: &AppStore, projects: &[Project]) {
    *store.projects().write() = projects.to_vec();
    *store.projects_loading().write() = false;
}

pub fn store_set_members(store: &AppStore, members: &[TeamMember]) {
    *store.members().write() = members.to_vec();
    *store.team_loading().write() = false;
}

pub fn store_push_toast(store: &AppStore, toast: Toast) {
    store.toasts().write().push(toast);
}

pub fn store_remove_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
