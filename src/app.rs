//! TaskDeck App
//!
//! Navigation bar, the selected page and the toast stack.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::components::{
    on_board_drop, CompletedList, Dashboard, KanbanBoard, NavBar, NewTodoForm, ProjectsPage,
    TeamPage, TodoList, Toasts,
};
use crate::context::{load_config, AppServices};
use crate::store::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Todos,
    Completed,
    Board,
    Projects,
    Team,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Todos,
        Page::Completed,
        Page::Board,
        Page::Projects,
        Page::Team,
        Page::Dashboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Todos => "Todos",
            Page::Completed => "Completed",
            Page::Board => "Board",
            Page::Projects => "Projects",
            Page::Team => "Team",
            Page::Dashboard => "Dashboard",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let config = load_config();
    let services = AppServices::compose(&config, store);
    services.load_remote();

    // Document-level listeners live as long as the app, not the board page
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |result| on_board_drop(services, result));

    let (page, set_page) = signal(Page::Todos);

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page store=store />
            <main class="main-content">
                {move || match page.get() {
                    Page::Todos => view! {
                        <h1>"Todos"</h1>
                        <NewTodoForm services=services />
                        <TodoList services=services store=store />
                    }.into_any(),
                    Page::Completed => view! { <CompletedList services=services store=store /> }.into_any(),
                    Page::Board => view! { <KanbanBoard services=services store=store dnd=dnd /> }.into_any(),
                    Page::Projects => view! { <ProjectsPage services=services store=store /> }.into_any(),
                    Page::Team => view! { <TeamPage store=store /> }.into_any(),
                    Page::Dashboard => view! { <Dashboard services=services store=store /> }.into_any(),
                }}
            </main>
            <Toasts store=store />
        </div>
    }
}
