//! Navigation Bar Component

use leptos::prelude::*;

use crate::app::Page;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn NavBar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    store: AppStore,
) -> impl IntoView {
    let badge = move |target: Page| -> Option<usize> {
        match target {
            Page::Todos => Some(store.todos().with(|t| t.iter().filter(|t| !t.completed).count())),
            Page::Completed => Some(store.todos().with(|t| t.iter().filter(|t| t.completed).count())),
            _ => None,
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"TaskDeck"</span>
            {Page::ALL.into_iter().map(move |target| {
                view! {
                    <button
                        class=move || if page.get() == target { "nav-link active" } else { "nav-link" }
                        on:click=move |_| set_page.set(target)
                    >
                        {target.label()}
                        {move || badge(target).map(|n| view! { <span class="nav-badge">{n}</span> })}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
