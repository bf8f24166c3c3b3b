//! Team Member Entities
//!
//! Profiles and roles come from separate collections and are merged
//! into `TeamMember` for display.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Role given to members without a role row
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(flatten)]
    pub profile: Profile,
    pub role: String,
}

impl TeamMember {
    /// Attach the first matching role, or the default one
    pub fn from_profile(profile: Profile, roles: &[UserRole]) -> Self {
        let role = roles
            .iter()
            .find(|r| r.user_id == profile.id)
            .map(|r| r.role.clone())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());
        Self { profile, role }
    }

    pub fn full_name(&self) -> &str {
        &self.profile.full_name
    }

    /// Upper-cased first letter, for avatar placeholders
    pub fn initial(&self) -> Option<char> {
        self.profile
            .full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }
}

impl Entity for TeamMember {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.profile.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: id.to_string(),
            full_name: name.to_string(),
            email: None,
            avatar_url: None,
        }
    }

    #[test]
    fn test_role_defaults_to_user() {
        let member = TeamMember::from_profile(profile("u1", "ada"), &[]);
        assert_eq!(member.role, DEFAULT_ROLE);
        assert_eq!(member.initial(), Some('A'));
    }

    #[test]
    fn test_role_is_looked_up_by_user_id() {
        let roles = vec![
            UserRole { user_id: "u2".into(), role: "manager".into() },
            UserRole { user_id: "u1".into(), role: "admin".into() },
        ];
        let member = TeamMember::from_profile(profile("u1", "Ada"), &roles);
        assert_eq!(member.role, "admin");
    }
}
