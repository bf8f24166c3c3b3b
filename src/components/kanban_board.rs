//! Kanban Board Component
//!
//! Five status columns. Dropping a card on a column persists that column
//! as the task's status; the slot inside the column is not stored.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{enter_target, make_on_mouseleave, DndSignals, DragResult};
use taskdeck_core::domain::{Task, TaskStatus};
use taskdeck_core::DragEnd;

use crate::components::{NewTaskForm, TaskCard};
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

/// Translate a finished gesture and hand it to the board
pub fn on_board_drop(services: AppServices, result: DragResult) {
    let drag = DragEnd::from_ids(
        &result.draggable_id,
        (&result.source.droppable_id, result.source.index),
        result
            .destination
            .as_ref()
            .map(|d| (d.droppable_id.as_str(), d.index)),
    );
    match drag {
        Ok(drag) => {
            let board = services.board();
            spawn_local(async move {
                let outcome = board.handle_drag_end(drag).await;
                log::debug!("[KanbanBoard] drop finished: {:?}", outcome);
            });
        }
        Err(e) => log::warn!("[KanbanBoard] ignoring drop: {}", e),
    }
}

#[component]
pub fn KanbanBoard(services: AppServices, store: AppStore, dnd: DndSignals) -> impl IntoView {
    view! {
        <section class="kanban">
            <div class="kanban-header">
                <h1>"Task Board"</h1>
                <NewTaskForm services=services store=store />
            </div>
            <Show
                when=move || !store.board_loading().get()
                fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
            >
                <div class="kanban-board">
                    {TaskStatus::ALL.into_iter().map(|status| view! {
                        <BoardColumn status=status services=services store=store dnd=dnd />
                    }).collect_view()}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn BoardColumn(
    status: TaskStatus,
    services: AppServices,
    store: AppStore,
    dnd: DndSignals,
) -> impl IntoView {
    let column_id = status.as_str();
    let tasks = move || {
        store.tasks().track();
        services.board().by_status(status)
    };

    // Anywhere in the column outside a card targets the end of the column
    let on_end_enter = move |_: web_sys::MouseEvent| {
        let len = services.board().by_status(status).len();
        enter_target(&dnd, column_id, len);
    };

    view! {
        <div
            class=move || if dnd.is_over(column_id) { "kanban-column drop-over" } else { "kanban-column" }
            on:mouseenter=on_end_enter
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div class=format!("column-header column-{}", column_id) on:mouseenter=on_end_enter>
                <h2>{status.title()}</h2>
                <span class="column-count">{move || tasks().len()}</span>
            </div>
            <div class="column-body">
                <For
                    each=move || tasks().into_iter().enumerate()
                    key=|(index, task)| (*index, task.id.clone(), task.status, task.title.clone())
                    children=move |(index, task): (usize, Task)| view! {
                        <TaskCard task=task index=index services=services store=store dnd=dnd />
                    }
                />
                <div class="column-tail" on:mouseenter=on_end_enter></div>
            </div>
        </div>
    }
}
