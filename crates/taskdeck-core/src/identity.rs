//! Actor Identity
//!
//! Who is signed in. Inserts are stamped with this id; without one they
//! are skipped.

/// Source of the current authenticated actor
pub trait Identity {
    fn current_actor(&self) -> Option<String>;
}

/// Fixed identity, e.g. read from configuration at startup
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(Option<String>);

impl StaticIdentity {
    pub fn signed_in(actor_id: impl Into<String>) -> Self {
        Self(Some(actor_id.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for StaticIdentity {
    fn from(actor: Option<String>) -> Self {
        Self(actor)
    }
}

impl Identity for StaticIdentity {
    fn current_actor(&self) -> Option<String> {
        self.0.clone()
    }
}
