//! Kanban Drag-and-Drop
//!
//! A finished drag gesture becomes one `DragEnd` event. Only the
//! destination column is persisted (as the task's status); the position
//! inside the column is visual only and `order_index` is left untouched.

use crate::domain::{TaskStatus, ValidationError};
use crate::store::TaskBoard;

/// A column and a position inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub column: TaskStatus,
    pub index: usize,
}

/// Outcome of a drag gesture as reported by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub task_id: String,
    pub source: DropLocation,
    /// `None` when dropped outside every column or cancelled
    pub destination: Option<DropLocation>,
}

impl DragEnd {
    /// Build from droppable ids (column ids are status strings).
    /// Unknown column ids are rejected.
    pub fn from_ids(
        draggable_id: &str,
        source: (&str, usize),
        destination: Option<(&str, usize)>,
    ) -> Result<Self, ValidationError> {
        let location = |(id, index): (&str, usize)| -> Result<DropLocation, ValidationError> {
            Ok(DropLocation {
                column: id.parse()?,
                index,
            })
        };
        Ok(Self {
            task_id: draggable_id.to_string(),
            source: location(source)?,
            destination: destination.map(location).transpose()?,
        })
    }

    /// Dropped back into the column it came from
    pub fn is_same_column(&self) -> bool {
        self.destination
            .map_or(false, |dest| dest.column == self.source.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// No destination; nothing was sent
    Abandoned,
    /// Status update acknowledged
    Moved { task_id: String, status: TaskStatus },
    /// Status update failed; the task keeps its old column
    Rejected { task_id: String },
}

impl TaskBoard {
    /// Persist the destination column as the task's new status. Any column
    /// can be reached from any other, and same-column drops are sent too.
    pub async fn handle_drag_end(&self, drag: DragEnd) -> DragOutcome {
        let Some(destination) = drag.destination else {
            log::debug!("[dnd] drag of {} ended outside any column", drag.task_id);
            return DragOutcome::Abandoned;
        };
        log::debug!(
            "[dnd] {} dropped on {} at {}",
            drag.task_id,
            destination.column,
            destination.index
        );
        if self.update_status(&drag.task_id, destination.column).await {
            DragOutcome::Moved {
                task_id: drag.task_id,
                status: destination.column,
            }
        } else {
            DragOutcome::Rejected { task_id: drag.task_id }
        }
    }
}
