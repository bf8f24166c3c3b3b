//! Todo List Component
//!
//! Active and completed views over the local todo store.

use leptos::prelude::*;
use taskdeck_core::domain::Todo;
use taskdeck_core::Notifier;

use crate::components::{DeleteConfirmButton, TodoItem};
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

/// Todos still to do, most recent first. Completed ones move to their own page.
#[component]
pub fn TodoList(services: AppServices, store: AppStore) -> impl IntoView {
    let active = move || {
        store.todos().track();
        services.todos().active_list()
    };

    view! {
        <section class="todo-list">
            <p class="item-count">
                {move || match active().len() {
                    1 => "1 active task".to_string(),
                    n => format!("{} active tasks", n),
                }}
            </p>
            <Show
                when=move || !active().is_empty()
                fallback=|| view! { <p class="empty">"No active tasks. Start by adding a new one!"</p> }
            >
                <ul>
                    <For
                        each=active
                        key=|todo| todo.id
                        children=move |todo: Todo| view! { <TodoItem todo=todo services=services /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

/// Completed todos with restore and permanent delete
#[component]
pub fn CompletedList(services: AppServices, store: AppStore) -> impl IntoView {
    let completed = move || {
        store.todos().track();
        services.todos().completed_list()
    };

    view! {
        <section class="todo-list completed-list">
            <h1>"Completed"</h1>
            <Show
                when=move || !completed().is_empty()
                fallback=|| view! { <p class="empty">"Nothing completed yet."</p> }
            >
                <ul>
                    <For
                        each=completed
                        key=|todo| todo.id
                        children=move |todo: Todo| {
                            let id = todo.id;
                            let restored = format!("\"{}\" restored to active tasks", todo.title);
                            let deleted = format!("\"{}\" deleted permanently", todo.title);
                            let item_title = todo.title.clone();
                            view! {
                                <li class="todo-item completed">
                                    <span class="todo-title">{todo.title}</span>
                                    <button
                                        class="restore-btn"
                                        on:click=move |_| {
                                            services.todos().toggle(&id);
                                            services.notifier().success(&restored);
                                        }
                                    >
                                        "Restore"
                                    </button>
                                    <DeleteConfirmButton
                                        item_title=item_title
                                        on_confirm=move |_: ()| {
                                            services.todos().delete(&id);
                                            services.notifier().success(&deleted);
                                        }
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
