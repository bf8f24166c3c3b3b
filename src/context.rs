//! Application Services
//!
//! Builds the core stores once at startup and hands them to components
//! as a copyable bundle. Each store's change listener mirrors its data
//! into the reactive `AppStore`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_core::repository::{DataSource, MemoryDataSource, RestDataSource};
use taskdeck_core::{
    AppConfig, Collaborators, DashboardSummary, Identity, Notifier, ProjectStore, StaticIdentity,
    TaskBoard, TeamDirectory, TodoStore,
};

use crate::platform::{ToastNotifier, WebStorage};
use crate::store::{store_set_members, store_set_projects, store_set_tasks, store_set_todos, AppStore};

/// Actor used when running without a backend
const LOCAL_ACTOR: &str = "local-user";

/// Read configuration baked in at build time
pub fn load_config() -> AppConfig {
    AppConfig::from_parts(
        option_env!("TASKDECK_STORAGE_KEY"),
        option_env!("TASKDECK_BACKEND_URL"),
        option_env!("TASKDECK_BACKEND_KEY"),
        option_env!("TASKDECK_ACTOR_ID"),
    )
    .unwrap_or_else(|e| {
        log::error!("[config] {}; falling back to defaults", e);
        AppConfig::default()
    })
}

/// Core stores, shared by every page
#[derive(Clone, Copy)]
pub struct AppServices {
    todos: StoredValue<Rc<TodoStore>, LocalStorage>,
    board: StoredValue<Rc<TaskBoard>, LocalStorage>,
    projects: StoredValue<Rc<ProjectStore>, LocalStorage>,
    team: StoredValue<Rc<TeamDirectory>, LocalStorage>,
    notifier: StoredValue<Rc<ToastNotifier>, LocalStorage>,
}

impl AppServices {
    pub fn compose(config: &AppConfig, store: AppStore) -> Self {
        let notifier = Rc::new(ToastNotifier::new(store));

        let source: Rc<dyn DataSource> = match &config.remote {
            Some(remote) => {
                log::info!("[services] using backend at {}", remote.url);
                Rc::new(RestDataSource::new(&remote.url, &remote.api_key))
            }
            None => {
                log::info!("[services] no backend configured, using in-memory data");
                Rc::new(MemoryDataSource::new())
            }
        };
        let actor = config
            .actor_id
            .clone()
            .or_else(|| config.remote.is_none().then(|| LOCAL_ACTOR.to_string()));
        let identity: Rc<dyn Identity> = Rc::new(StaticIdentity::from(actor));
        let deps = Collaborators {
            source: source.clone(),
            identity,
            notifier: notifier.clone(),
        };

        let todos = Rc::new(TodoStore::open(Rc::new(WebStorage), config.storage_key.clone()));
        store_set_todos(&store, &todos.todos());
        todos.subscribe(move |todos| store_set_todos(&store, todos));

        let board = Rc::new(TaskBoard::new(deps.clone()));
        board.subscribe(move |tasks| store_set_tasks(&store, tasks));

        let projects = Rc::new(ProjectStore::new(deps));
        projects.subscribe(move |projects| store_set_projects(&store, projects));

        let notify: Rc<dyn Notifier> = notifier.clone();
        let team = Rc::new(TeamDirectory::new(source, notify));
        team.subscribe(move |members| store_set_members(&store, members));

        Self {
            todos: StoredValue::new_local(todos),
            board: StoredValue::new_local(board),
            projects: StoredValue::new_local(projects),
            team: StoredValue::new_local(team),
            notifier: StoredValue::new_local(notifier),
        }
    }

    /// Start the first fetch of every remote-backed store
    pub fn load_remote(&self) {
        let board = self.board();
        let projects = self.projects();
        let team = self.team();
        spawn_local(async move {
            board.fetch_all().await;
        });
        spawn_local(async move {
            projects.fetch_all().await;
        });
        spawn_local(async move {
            team.fetch_all().await;
        });
    }

    pub fn todos(&self) -> Rc<TodoStore> {
        self.todos.get_value()
    }

    pub fn board(&self) -> Rc<TaskBoard> {
        self.board.get_value()
    }

    pub fn projects(&self) -> Rc<ProjectStore> {
        self.projects.get_value()
    }

    pub fn team(&self) -> Rc<TeamDirectory> {
        self.team.get_value()
    }

    pub fn notifier(&self) -> Rc<ToastNotifier> {
        self.notifier.get_value()
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::collect(&self.board(), &self.projects(), &self.team())
    }
}
