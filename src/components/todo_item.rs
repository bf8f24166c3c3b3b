//! Todo Item Component

use leptos::prelude::*;
use taskdeck_core::domain::Todo;

use crate::components::DeleteConfirmButton;
use crate::context::AppServices;

#[component]
pub fn TodoItem(todo: Todo, services: AppServices) -> impl IntoView {
    let id = todo.id;
    let item_title = todo.title.clone();
    let created = todo.created_at.format("%b %-d, %Y").to_string();

    view! {
        <li class="todo-item" class:completed=todo.completed>
            <input
                type="checkbox"
                prop:checked=todo.completed
                on:change=move |_| services.todos().toggle(&id)
            />
            <div class="todo-body">
                <span class="todo-title">{todo.title}</span>
                {todo.description.map(|d| view! { <p class="todo-description">{d}</p> })}
                <span class="todo-date">{created}</span>
            </div>
            <DeleteConfirmButton
                item_title=item_title
                on_confirm=move |_: ()| services.todos().delete(&id)
            />
        </li>
    }
}
