//! Task Board Store
//!
//! Remote-backed tasks grouped into the five status columns.

use super::collection::{Messages, Placement, RemoteCollection, RemoteEntity};
use crate::domain::{NewTask, Task, TaskPatch, TaskStatus};
use crate::repository::{Order, Table};
use crate::summary::TaskSummary;

impl RemoteEntity for Task {
    type New = NewTask;
    type Patch = TaskPatch;

    const TABLE: Table = Table::Tasks;
    const ORDER: Order = Order::asc("order_index");
    const PLACEMENT: Placement = Placement::Append;
    const MESSAGES: Messages = Messages {
        load_failed: "Failed to load tasks",
        created: "Task created successfully",
        create_failed: "Failed to create task",
        updated: None,
        update_failed: "Failed to update task",
        deleted: "Task deleted",
        delete_failed: "Failed to delete task",
    };

    fn apply_patch(&mut self, patch: &TaskPatch) {
        patch.apply(self);
    }
}

pub type TaskBoard = RemoteCollection<Task>;

impl RemoteCollection<Task> {
    /// Move a task to another column
    pub async fn update_status(&self, id: &str, status: TaskStatus) -> bool {
        self.update(id, &TaskPatch::status(status)).await
    }

    /// Tasks in `status`, in cache order. Never touches the data source.
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.with_rows(|tasks| tasks.iter().filter(|t| t.status == status).cloned().collect())
    }

    /// Every column left to right with its tasks
    pub fn columns(&self) -> Vec<(TaskStatus, Vec<Task>)> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| (status, self.by_status(status)))
            .collect()
    }

    pub fn summary(&self) -> TaskSummary {
        self.with_rows(TaskSummary::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RemoteError;
    use crate::identity::StaticIdentity;
    use crate::notify::RecordingNotifier;
    use crate::repository::{MemoryDataSource, Operation};
    use crate::store::Collaborators;
    use serde_json::json;
    use std::rc::Rc;

    struct Fixture {
        board: TaskBoard,
        source: Rc<MemoryDataSource>,
        notifier: RecordingNotifier,
    }

    fn setup(identity: StaticIdentity) -> Fixture {
        let source = Rc::new(MemoryDataSource::new());
        let notifier = RecordingNotifier::new();
        let board = TaskBoard::new(Collaborators {
            source: source.clone(),
            identity: Rc::new(identity),
            notifier: Rc::new(notifier.clone()),
        });
        Fixture { board, source, notifier }
    }

    fn task_row(id: &str, status: &str, order_index: i64) -> serde_json::Value {
        json!({ "id": id, "title": format!("Task {}", id), "status": status, "order_index": order_index })
    }

    async fn seeded() -> Fixture {
        let fx = setup(StaticIdentity::signed_in("user-1"));
        fx.source.seed(
            Table::Tasks,
            vec![
                task_row("t2", "in_progress", 2),
                task_row("t1", "backlog", 1),
                task_row("t3", "backlog", 3),
            ],
        );
        assert!(fx.board.fetch_all().await);
        fx
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_fetch_orders_by_order_index() {
        let fx = seeded().await;
        assert!(!fx.board.is_loading());
        assert_eq!(ids(&fx.board.rows()), vec!["t1", "t2", "t3"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_rows() {
        let fx = seeded().await;
        fx.source.fail_next(Operation::Select, RemoteError::Transport("offline".into()));

        assert!(!fx.board.fetch_all().await);
        assert_eq!(fx.board.len(), 3);
        assert!(!fx.board.is_loading());
        assert_eq!(fx.notifier.errors(), vec!["Failed to load tasks"]);
    }

    #[tokio::test]
    async fn test_first_fetch_failure_clears_loading() {
        let fx = setup(StaticIdentity::anonymous());
        assert!(fx.board.is_loading());
        fx.source.fail_next(Operation::Select, RemoteError::Transport("offline".into()));

        fx.board.fetch_all().await;
        assert!(!fx.board.is_loading());
        assert!(fx.board.is_empty());
    }

    #[tokio::test]
    async fn test_create_appends_and_stamps_actor() {
        let fx = seeded().await;
        let created = fx.board.create(&NewTask::new("Write docs")).await.unwrap();

        assert_eq!(created.status, TaskStatus::Backlog);
        assert_eq!(created.created_by.as_deref(), Some("user-1"));
        assert_eq!(fx.board.rows().last().unwrap().id, created.id);
        assert_eq!(fx.source.rows(Table::Tasks)[3]["created_by"], "user-1");
        assert_eq!(fx.notifier.successes(), vec!["Task created successfully"]);
    }

    #[tokio::test]
    async fn test_create_without_actor_is_noop() {
        let fx = setup(StaticIdentity::anonymous());
        assert!(fx.board.create(&NewTask::new("Nope")).await.is_none());

        assert_eq!(fx.source.count(Operation::Insert), 0);
        assert!(fx.board.is_empty());
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_reports() {
        let fx = seeded().await;
        fx.source.fail_next(
            Operation::Insert,
            RemoteError::Status { code: 409, message: "duplicate".into() },
        );

        assert!(fx.board.create(&NewTask::new("Dup")).await.is_none());
        assert_eq!(fx.board.len(), 3);
        assert_eq!(fx.notifier.errors(), vec!["Failed to create task"]);
    }

    #[tokio::test]
    async fn test_update_merges_patch_after_ack() {
        let fx = seeded().await;
        let patch = TaskPatch {
            title: Some("Renamed".into()),
            ..Default::default()
        };

        assert!(fx.board.update("t1", &patch).await);
        let task = fx.board.get("t1").unwrap();
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.status, TaskStatus::Backlog);
        assert_eq!(fx.source.rows(Table::Tasks)[1]["title"], "Renamed");
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_update_failure_leaves_row() {
        let fx = seeded().await;
        fx.source.fail_next(Operation::Update, RemoteError::Transport("offline".into()));

        assert!(!fx.board.update_status("t1", TaskStatus::Closed).await);
        assert_eq!(fx.board.get("t1").unwrap().status, TaskStatus::Backlog);
        assert_eq!(fx.notifier.errors(), vec!["Failed to update task"]);
    }

    #[tokio::test]
    async fn test_update_status_moves_between_columns() {
        let fx = seeded().await;
        assert!(fx.board.update_status("t1", TaskStatus::InProgress).await);

        assert_eq!(ids(&fx.board.by_status(TaskStatus::InProgress)), vec!["t1", "t2"]);
        assert_eq!(ids(&fx.board.by_status(TaskStatus::Backlog)), vec!["t3"]);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let fx = seeded().await;
        assert!(fx.board.delete("t2").await);

        assert!(fx.board.get("t2").is_none());
        assert_eq!(fx.source.rows(Table::Tasks).len(), 2);
        assert_eq!(fx.notifier.successes(), vec!["Task deleted"]);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_row_and_notifies_once() {
        let fx = seeded().await;
        fx.source.fail_next(Operation::Delete, RemoteError::Transport("offline".into()));

        assert!(!fx.board.delete("t2").await);
        assert!(fx.board.get("t2").is_some());
        assert_eq!(fx.notifier.errors(), vec!["Failed to delete task"]);
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_columns_cover_every_status() {
        let fx = seeded().await;
        let columns = fx.board.columns();

        let statuses: Vec<_> = columns.iter().map(|(s, _)| *s).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert_eq!(columns[0].1.len(), 2);
        assert_eq!(columns[1].1.len(), 1);
        assert!(columns[4].1.is_empty());
    }

    #[tokio::test]
    async fn test_by_status_is_local_only() {
        let fx = seeded().await;
        let calls = fx.source.calls().len();
        fx.board.by_status(TaskStatus::Backlog);
        fx.board.columns();
        assert_eq!(fx.source.calls().len(), calls);
    }
}
