//! New Todo Form Component

use leptos::prelude::*;
use taskdeck_core::domain::NewTodo;
use taskdeck_core::Notifier;

use crate::context::AppServices;

#[component]
pub fn NewTodoForm(services: AppServices) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match NewTodo::parse(&title.get_untracked(), &description.get_untracked()) {
            Ok(input) => {
                services.todos().add_new(&input);
                services.notifier().success("Task added successfully!");
                set_title.set(String::new());
                set_description.set(String::new());
            }
            Err(e) => {
                log::debug!("[NewTodoForm] rejected: {}", e);
                services.notifier().error("Task title cannot be empty");
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Add Task"</button>
        </form>
    }
}
