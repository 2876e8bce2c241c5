//! Role domain models.
//!
//! Roles are named permission groups. Names are stored upper-cased with a `ROLE_` prefix.

use crate::server::model::user::User;

/// Role assigned to every newly registered user.
pub const DEFAULT_USER_ROLE: &str = "ROLE_USER";

/// Role for administrators.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

const ROLE_PREFIX: &str = "ROLE_";

/// A role together with its current members.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    /// Database ID of the role.
    pub id: i32,
    /// Normalized role name (e.g. "ROLE_ADMIN").
    pub name: String,
    /// Users holding this role.
    pub users: Vec<User>,
}

impl Role {
    /// Converts an entity model and its loaded members to a role domain model.
    ///
    /// # Arguments
    /// - `entity` - The role entity model from the database
    /// - `users` - Members of the role
    pub fn from_entity(entity: entity::role::Model, users: Vec<User>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            users,
        }
    }

    /// Returns whether the user with the given ID holds this role.
    pub fn has_user(&self, user_id: i32) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }
}

/// Normalizes a role name to its stored form.
///
/// Trims whitespace, upper-cases the name and adds the `ROLE_` prefix when it is not
/// already present, so `"admin"`, `"ADMIN"` and `"ROLE_ADMIN"` all map to `"ROLE_ADMIN"`.
pub fn normalize_role_name(name: &str) -> String {
    let upper = name.trim().to_uppercase();

    if upper.starts_with(ROLE_PREFIX) {
        upper
    } else {
        format!("{}{}", ROLE_PREFIX, upper)
    }
}
