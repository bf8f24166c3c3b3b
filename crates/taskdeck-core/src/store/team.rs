//! Team Directory
//!
//! Profiles sorted by name, each with its role merged in.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::Listeners;
use crate::domain::{Profile, RemoteResult, TeamMember, UserRole};
use crate::notify::Notifier;
use crate::repository::{select_rows, DataSource, Order, Table};

pub struct TeamDirectory {
    members: RefCell<Vec<TeamMember>>,
    loading: Cell<bool>,
    source: Rc<dyn DataSource>,
    notifier: Rc<dyn Notifier>,
    listeners: Listeners<TeamMember>,
}

impl TeamDirectory {
    pub fn new(source: Rc<dyn DataSource>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            members: RefCell::new(Vec::new()),
            loading: Cell::new(true),
            source,
            notifier,
            listeners: Listeners::default(),
        }
    }

    /// Load profiles and roles. If either request fails the previous
    /// members are kept.
    pub async fn fetch_all(&self) -> bool {
        let ok = match self.load().await {
            Ok(members) => {
                log::debug!("[team] fetched {} members", members.len());
                *self.members.borrow_mut() = members;
                true
            }
            Err(e) => {
                log::error!("[team] fetch failed: {}", e);
                self.notifier.error("Failed to load team members");
                false
            }
        };
        self.loading.set(false);
        self.listeners.emit(&self.members.borrow());
        ok
    }

    async fn load(&self) -> RemoteResult<Vec<TeamMember>> {
        let source = self.source.as_ref();
        let profiles: Vec<Profile> =
            select_rows(source, Table::Profiles, Some(Order::asc("full_name"))).await?;
        let roles: Vec<UserRole> = select_rows(source, Table::UserRoles, None).await?;
        Ok(profiles
            .into_iter()
            .map(|profile| TeamMember::from_profile(profile, &roles))
            .collect())
    }

    pub fn members(&self) -> Vec<TeamMember> {
        self.members.borrow().clone()
    }

    /// First `n` members in name order
    pub fn top_members(&self, n: usize) -> Vec<TeamMember> {
        self.members.borrow().iter().take(n).cloned().collect()
    }

    /// Display name of the referenced member, if known
    pub fn name_of(&self, id: Option<&str>) -> Option<String> {
        let id = id?;
        self.members
            .borrow()
            .iter()
            .find(|m| m.profile.id == id)
            .map(|m| m.profile.full_name.clone())
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn subscribe(&self, callback: impl Fn(&[TeamMember]) + 'static) {
        self.listeners.push(callback);
    }
}
