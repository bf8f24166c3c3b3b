//! Domain Layer
//!
//! Entities, validation and errors. No collaborator dependencies.

mod entity;
mod error;
mod member;
mod project;
mod task;
mod todo;

pub use entity::Entity;
pub use error::{ConfigError, RemoteError, RemoteResult, StorageError, ValidationError};
pub use member::{Profile, TeamMember, UserRole, DEFAULT_ROLE};
pub use project::{NewProject, Project, ProjectPatch};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
pub use todo::{validate_title, NewTodo, Todo, TodoId};
