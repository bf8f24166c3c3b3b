//! Task Card Component
//!
//! A draggable card on the board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, make_on_target_mouseenter, DndSignals, DropTarget};
use taskdeck_core::domain::Task;

use crate::components::DeleteConfirmButton;
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn TaskCard(
    task: Task,
    index: usize,
    services: AppServices,
    store: AppStore,
    dnd: DndSignals,
) -> impl IntoView {
    let column_id = task.status.as_str().to_string();
    let on_mousedown = make_on_mousedown(
        dnd,
        task.id.clone(),
        DropTarget { droppable_id: column_id.clone(), index },
    );
    let on_mouseenter = make_on_target_mouseenter(dnd, column_id, index);

    let dragged_id = task.id.clone();
    let is_dragging = move || dnd.dragging_id().as_deref() == Some(dragged_id.as_str());

    let project_id = task.project_id.clone();
    let project = move || {
        store.projects().track();
        services.projects().title_of(project_id.as_deref())
    };
    let assignee_id = task.assignee_id.clone();
    let assignee = move || {
        store.members().track();
        services.team().name_of(assignee_id.as_deref())
    };
    let deadline = task.deadline.map(|d| d.format("%b %-d").to_string());

    let item_title = task.title.clone();
    let delete_id = task.id.clone();
    let on_delete = move |_: ()| {
        let board = services.board();
        let id = delete_id.clone();
        spawn_local(async move {
            board.delete(&id).await;
        });
    };

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
        >
            <div class="task-card-header">
                <span class="task-title">{task.title}</span>
                <DeleteConfirmButton item_title=item_title on_confirm=on_delete />
            </div>
            {task.description.map(|d| view! { <p class="task-description">{d}</p> })}
            <div class="task-meta">
                {deadline.map(|d| view! { <span class="task-deadline">{d}</span> })}
                {move || project().map(|p| view! { <span class="task-project">{p}</span> })}
                {move || assignee().map(|a| view! { <span class="task-assignee">{a}</span> })}
            </div>
        </div>
    }
}
