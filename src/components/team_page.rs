//! Team Page Component

use leptos::prelude::*;
use taskdeck_core::domain::TeamMember;

use crate::store::{AppStateStoreFields, AppStore};

#[component]
pub fn MemberRow(member: TeamMember) -> impl IntoView {
    let initial = member.initial().map(String::from).unwrap_or_default();
    view! {
        <li class="member-row">
            <span class="member-avatar">{initial}</span>
            <div class="member-info">
                <span class="member-name">{member.profile.full_name}</span>
                {member.profile.email.map(|e| view! { <span class="member-email">{e}</span> })}
            </div>
            <span class="member-role">{member.role}</span>
        </li>
    }
}

#[component]
pub fn TeamPage(store: AppStore) -> impl IntoView {
    view! {
        <section class="team-page">
            <h1>"Team"</h1>
            <Show
                when=move || !store.team_loading().get()
                fallback=|| view! { <div class="loading">"Loading team..."</div> }
            >
                <ul class="member-list">
                    <For
                        each=move || store.members().get()
                        key=|member| (member.profile.id.clone(), member.role.clone())
                        children=|member: TeamMember| view! { <MemberRow member=member /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
