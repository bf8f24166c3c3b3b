//! Dashboard Component
//!
//! Headline counts over the board, projects and team.

use leptos::prelude::*;
use taskdeck_core::domain::TeamMember;

use crate::components::MemberRow;
use crate::context::AppServices;
use crate::store::{AppStateStoreFields, AppStore};

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn Dashboard(services: AppServices, store: AppStore) -> impl IntoView {
    let loading = move || {
        store.board_loading().get() || store.projects_loading().get() || store.team_loading().get()
    };
    let summary = Memo::new(move |_| {
        store.tasks().track();
        store.projects().track();
        store.members().track();
        services.summary()
    });

    view! {
        <section class="dashboard">
            <h1>"Dashboard"</h1>
            <Show
                when=move || !loading()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="stat-grid">
                    <StatCard label="Total Tasks" value=Signal::derive(move || summary.get().tasks.total) />
                    <StatCard label="Completed" value=Signal::derive(move || summary.get().tasks.completed) />
                    <StatCard label="Active" value=Signal::derive(move || summary.get().tasks.active) />
                    <StatCard label="Projects" value=Signal::derive(move || summary.get().projects) />
                    <StatCard label="Team Members" value=Signal::derive(move || summary.get().members) />
                </div>
                <h2>"Team"</h2>
                <ul class="member-list">
                    <For
                        each=move || summary.get().top_members
                        key=|member| member.profile.id.clone()
                        children=|member: TeamMember| view! { <MemberRow member=member /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
