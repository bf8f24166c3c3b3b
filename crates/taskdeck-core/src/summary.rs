//! Dashboard Summaries

use crate::domain::{Task, TaskStatus, TeamMember};
use crate::store::{ProjectStore, TaskBoard, TeamDirectory};

/// How many members the dashboard lists
pub const TOP_MEMBERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    /// Neither completed nor closed
    pub active: usize,
}

impl TaskSummary {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.status == TaskStatus::Completed).count(),
            active: tasks.iter().filter(|t| t.status.is_active()).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub tasks: TaskSummary,
    pub projects: usize,
    pub members: usize,
    pub top_members: Vec<TeamMember>,
}

impl DashboardSummary {
    pub fn collect(board: &TaskBoard, projects: &ProjectStore, team: &TeamDirectory) -> Self {
        Self {
            tasks: board.summary(),
            projects: projects.len(),
            members: team.len(),
            top_members: team.top_members(TOP_MEMBERS),
        }
    }

    pub fn is_loading(board: &TaskBoard, projects: &ProjectStore, team: &TeamDirectory) -> bool {
        board.is_loading() || projects.is_loading() || team.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: TaskStatus) -> Task {
        Task {
            id: status.as_str().to_string(),
            title: "t".into(),
            description: None,
            status,
            deadline: None,
            project_id: None,
            assignee_id: None,
            order_index: 0,
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let tasks: Vec<_> = TaskStatus::ALL.into_iter().map(task).collect();
        let summary = TaskSummary::of(&tasks);
        assert_eq!(summary, TaskSummary { total: 5, completed: 1, active: 3 });
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(TaskSummary::of(&[]), TaskSummary::default());
    }
}
