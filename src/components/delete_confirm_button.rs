//! Delete Confirm Button Component
//!
//! Two-step delete for todos, board tasks and projects

use leptos::prelude::*;

/// Longer titles are cut in the prompt
const PROMPT_TITLE_CHARS: usize = 24;

/// `Delete "<title>"?`, with long titles shortened
fn confirm_prompt(title: &str) -> String {
    let mut chars = title.chars();
    let head: String = chars.by_ref().take(PROMPT_TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("Delete \"{}…\"?", head.trim_end())
    } else {
        format!("Delete \"{}\"?", head)
    }
}

/// The first click arms the button and names the item; the second one deletes.
/// Escape or "Keep" disarms it.
#[component]
pub fn DeleteConfirmButton(
    /// Title of the item being deleted
    #[prop(into)]
    item_title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);
    let prompt = confirm_prompt(&item_title);

    move || {
        if armed.get() {
            let prompt = prompt.clone();
            view! {
                <span
                    class="delete-confirm"
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            set_armed.set(false);
                        }
                    }
                >
                    <span class="delete-confirm-text">{prompt}</span>
                    <button
                        class="confirm-btn danger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                            on_confirm.run(());
                        }
                    >
                        "Delete"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(false);
                        }
                    >
                        "Keep"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_item() {
        assert_eq!(confirm_prompt("Buy milk"), "Delete \"Buy milk\"?");
    }

    #[test]
    fn test_prompt_shortens_long_titles() {
        let prompt = confirm_prompt("Prepare the quarterly planning review deck");
        assert_eq!(prompt, "Delete \"Prepare the quarterly pl…\"?");
    }
}
