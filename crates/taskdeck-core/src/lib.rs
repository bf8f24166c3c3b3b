//! TaskDeck Core
//!
//! Layered like the app it serves:
//! - domain: entities, validation and errors
//! - repository: durable storage and remote data source seams
//! - store: the state containers presentation code reads from
//! - dnd: kanban drag outcome handling

pub mod config;
pub mod dnd;
pub mod domain;
pub mod identity;
pub mod notify;
pub mod repository;
pub mod store;
pub mod summary;

pub use config::AppConfig;
pub use dnd::{DragEnd, DragOutcome, DropLocation};
pub use identity::{Identity, StaticIdentity};
pub use notify::{Level, LogNotifier, Notification, Notifier, RecordingNotifier};
pub use store::{Collaborators, ProjectStore, TaskBoard, TeamDirectory, TodoStore};
pub use summary::{DashboardSummary, TaskSummary};
