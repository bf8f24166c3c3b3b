//! Task Entity
//!
//! Remote-backed board record. The remote data source is the system of
//! record; the board keeps a cache of these rows.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::error::ValidationError;

/// Workflow bucket a task sits in. Also the kanban column identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Backlog,
    InProgress,
    InReview,
    Completed,
    Closed,
}

impl TaskStatus {
    /// Board columns, left to right
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Backlog,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Completed,
        TaskStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "backlog",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::InReview => "in_review",
            TaskStatus::Completed => "completed",
            TaskStatus::Closed => "closed",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Backlog => "Backlog",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Completed => "Completed",
            TaskStatus::Closed => "Closed",
        }
    }

    /// Counts towards the "active" dashboard figure
    pub fn is_active(&self) -> bool {
        !matches!(self, TaskStatus::Completed | TaskStatus::Closed)
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task row as stored by the remote data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields for a task about to be inserted. `created_by` is stamped by the board.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update. `None` leaves a field alone; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

impl TaskPatch {
    /// Patch that only moves the task to another column
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Merge the present fields into `task`
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(project_id) = &self.project_id {
            task.project_id = project_id.clone();
        }
        if let Some(assignee_id) = &self.assignee_id {
            task.assignee_id = assignee_id.clone();
        }
        if let Some(order_index) = self.order_index {
            task.order_index = order_index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: Some("details".to_string()),
            status: TaskStatus::Backlog,
            deadline: None,
            project_id: Some("p1".to_string()),
            assignee_id: None,
            order_index: 0,
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert_eq!(
            "done".parse::<TaskStatus>(),
            Err(ValidationError::UnknownStatus("done".to_string()))
        );
        assert!(serde_json::from_str::<TaskStatus>("\"IN_PROGRESS\"").is_err());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&TaskStatus::InReview).unwrap(), "\"in_review\"");
    }

    #[test]
    fn test_row_with_nulls_deserializes() {
        let row = serde_json::json!({
            "id": "t1",
            "title": "Ship it",
            "description": null,
            "status": "in_progress",
            "deadline": "2026-03-01T00:00:00+00:00",
            "project_id": null,
            "assignee_id": null,
            "order_index": 3,
        });
        let task: Task = serde_json::from_value(row).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.order_index, 3);
        assert!(task.deadline.is_some());
        assert!(task.project_id.is_none());
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let json = serde_json::to_value(TaskPatch::status(TaskStatus::Closed)).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "closed" }));

        let clear = TaskPatch {
            project_id: Some(None),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(clear).unwrap(),
            serde_json::json!({ "project_id": null })
        );
    }

    #[test]
    fn test_patch_apply_merges_fields() {
        let mut task = make_task("t1");
        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            project_id: Some(None),
            ..Default::default()
        };
        patch.apply(&mut task);

        assert_eq!(task.title, "Renamed");
        assert_eq!(task.project_id, None);
        assert_eq!(task.description.as_deref(), Some("details"));
        assert_eq!(task.status, TaskStatus::Backlog);
    }

    #[test]
    fn test_active_statuses() {
        assert!(TaskStatus::Backlog.is_active());
        assert!(TaskStatus::InReview.is_active());
        assert!(!TaskStatus::Completed.is_active());
        assert!(!TaskStatus::Closed.is_active());
    }
}
