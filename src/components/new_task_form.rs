//! New Task Form Component
//!
//! Creates a board task in the Backlog column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_core::domain::{validate_title, NewTask, Project, TeamMember};
use taskdeck_core::Notifier;

use crate::components::form_input::{non_empty, parse_deadline};
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn NewTaskForm(services: AppServices, store: AppStore) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());
    let (project_id, set_project_id) = signal(String::new());
    let (assignee_id, set_assignee_id) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_deadline.set(String::new());
        set_project_id.set(String::new());
        set_assignee_id.set(String::new());
    };

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        if let Err(e) = validate_title(&text) {
            log::debug!("[NewTaskForm] rejected: {}", e);
            services.notifier().error("Task title cannot be empty");
            return;
        }
        let new = NewTask {
            description: non_empty(description.get_untracked()),
            deadline: parse_deadline(&deadline.get_untracked()),
            project_id: non_empty(project_id.get_untracked()),
            assignee_id: non_empty(assignee_id.get_untracked()),
            ..NewTask::new(text.trim())
        };
        let board = services.board();
        spawn_local(async move {
            if board.create(&new).await.is_some() {
                reset();
                set_open.set(false);
            }
        });
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button class="primary-btn" on:click=move |_| set_open.set(true)>"New Task"</button>
            }
        >
            <form class="new-task-form" on:submit=create_task>
                <input
                    type="text"
                    placeholder="Task title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="date"
                    prop:value=move || deadline.get()
                    on:input=move |ev| set_deadline.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || project_id.get()
                    on:change=move |ev| set_project_id.set(event_target_value(&ev))
                >
                    <option value="">"No project"</option>
                    <For
                        each=move || store.projects().get()
                        key=|project| project.id.clone()
                        children=|project: Project| view! {
                            <option value=project.id>{project.title}</option>
                        }
                    />
                </select>
                <select
                    prop:value=move || assignee_id.get()
                    on:change=move |ev| set_assignee_id.set(event_target_value(&ev))
                >
                    <option value="">"Unassigned"</option>
                    <For
                        each=move || store.members().get()
                        key=|member| member.profile.id.clone()
                        children=|member: TeamMember| {
                            let name = member.full_name().to_string();
                            view! { <option value=member.profile.id>{name}</option> }
                        }
                    />
                </select>
                <div class="form-actions">
                    <button type="submit">"Create"</button>
                    <button
                        type="button"
                        on:click=move |_| {
                            reset();
                            set_open.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
