//! UI Components
//!
//! Leptos components for every page.

mod dashboard;
mod delete_confirm_button;
mod form_input;
mod kanban_board;
mod nav_bar;
mod new_task_form;
mod new_todo_form;
mod projects_page;
mod task_card;
mod team_page;
mod toasts;
mod todo_item;
mod todo_list;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_board::{on_board_drop, KanbanBoard};
pub use nav_bar::NavBar;
pub use new_task_form::NewTaskForm;
pub use new_todo_form::NewTodoForm;
pub use projects_page::ProjectsPage;
pub use task_card::TaskCard;
pub use team_page::{MemberRow, TeamPage};
pub use toasts::Toasts;
pub use todo_item::TodoItem;
pub use todo_list::{CompletedList, TodoList};
