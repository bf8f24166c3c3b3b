//! Projects Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_core::domain::{validate_title, NewProject, Project};
use taskdeck_core::Notifier;

use crate::components::form_input::{non_empty, parse_deadline, split_categories};
use crate::components::DeleteConfirmButton;
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn ProjectsPage(services: AppServices, store: AppStore) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());
    let (categories, set_categories) = signal(String::new());

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = title.get_untracked();
        let Ok(text) = validate_title(&raw) else {
            services.notifier().error("Project title cannot be empty");
            return;
        };
        let new = NewProject {
            description: non_empty(description.get_untracked()),
            deadline: parse_deadline(&deadline.get_untracked()),
            categories: split_categories(&categories.get_untracked()),
            ..NewProject::new(text)
        };
        let projects = services.projects();
        spawn_local(async move {
            if projects.create(&new).await.is_some() {
                set_title.set(String::new());
                set_description.set(String::new());
                set_deadline.set(String::new());
                set_categories.set(String::new());
            }
        });
    };

    view! {
        <section class="projects-page">
            <h1>"Projects"</h1>
            <form class="new-item-form" on:submit=create_project>
                <input
                    type="text"
                    placeholder="Project title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    title="Deadline"
                    prop:value=move || deadline.get()
                    on:input=move |ev| set_deadline.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Categories (comma separated)"
                    prop:value=move || categories.get()
                    on:input=move |ev| set_categories.set(event_target_value(&ev))
                />
                <button type="submit">"Add Project"</button>
            </form>
            <Show
                when=move || !store.projects_loading().get()
                fallback=|| view! { <div class="loading">"Loading projects..."</div> }
            >
                <div class="project-grid">
                    <For
                        each=move || store.projects().get()
                        key=|project| (project.id.clone(), project.title.clone())
                        children=move |project: Project| view! {
                            <ProjectCard project=project services=services store=store />
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, services: AppServices, store: AppStore) -> impl IntoView {
    let project_id = project.id.clone();
    let task_count = move || {
        store
            .tasks()
            .with(|tasks| tasks.iter().filter(|t| t.project_id.as_deref() == Some(project_id.as_str())).count())
    };
    let deadline = project.deadline.map(|d| d.format("%b %-d, %Y").to_string());

    let item_title = project.title.clone();
    let delete_id = project.id.clone();
    let on_delete = move |_: ()| {
        let projects = services.projects();
        let id = delete_id.clone();
        spawn_local(async move {
            projects.delete(&id).await;
        });
    };

    view! {
        <div class="project-card">
            <div class="project-card-header">
                <h2>{project.title}</h2>
                <DeleteConfirmButton item_title=item_title on_confirm=on_delete />
            </div>
            {project.description.map(|d| view! { <p class="project-description">{d}</p> })}
            <div class="project-meta">
                <span>{move || format!("{} tasks", task_count())}</span>
                {deadline.map(|d| view! { <span class="project-deadline">{d}</span> })}
            </div>
            <div class="project-categories">
                {project.categories.into_iter().map(|c| view! { <span class="category-tag">{c}</span> }).collect_view()}
            </div>
        </div>
    }
}
