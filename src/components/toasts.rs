//! Toast Stack Component

use leptos::prelude::*;
use taskdeck_core::Level;

use crate::store::{store_remove_toast, AppStateStoreFields, AppStore, Toast};

#[component]
pub fn Toasts(store: AppStore) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.level {
                        Level::Success => "toast toast-success",
                        Level::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| store_remove_toast(&store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
