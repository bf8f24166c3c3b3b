//! Project Store
//!
//! Newest-first project list used for the projects page and for
//! resolving a task's project association.

use super::collection::{Messages, Placement, RemoteCollection, RemoteEntity};
use crate::domain::{NewProject, Project, ProjectPatch};
use crate::repository::{Order, Table};

impl RemoteEntity for Project {
    type New = NewProject;
    type Patch = ProjectPatch;

    const TABLE: Table = Table::Projects;
    const ORDER: Order = Order::desc("created_at");
    const PLACEMENT: Placement = Placement::Prepend;
    const MESSAGES: Messages = Messages {
        load_failed: "Failed to load projects",
        created: "Project created successfully",
        create_failed: "Failed to create project",
        updated: Some("Project updated"),
        update_failed: "Failed to update project",
        deleted: "Project deleted",
        delete_failed: "Failed to delete project",
    };

    fn apply_patch(&mut self, patch: &ProjectPatch) {
        patch.apply(self);
    }
}

pub type ProjectStore = RemoteCollection<Project>;

impl RemoteCollection<Project> {
    /// Title of the referenced project, if it is known
    pub fn title_of(&self, id: Option<&str>) -> Option<String> {
        let id = id?;
        self.with_rows(|projects| {
            projects.iter().find(|p| p.id == id).map(|p| p.title.clone())
        })
    }
}
