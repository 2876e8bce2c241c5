//! User domain models and parameters.
//!
//! Users are identified by their unique email address and carry the names of the roles
//! they hold. Passwords are only ever stored hashed.

/// Registered user with the names of their roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database ID of the user.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique email address.
    pub email: String,
    /// Password hash produced by the configured `PasswordEncoder`.
    pub password: String,
    /// Names of the roles held by the user, sorted alphabetically.
    pub roles: Vec<String>,
}

impl User {
    /// Converts an entity model and its role names to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user entity model from the database
    /// - `roles` - Names of the roles held by the user
    pub fn from_entity(entity: entity::user::Model, roles: Vec<String>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password: entity.password,
            roles,
        }
    }

    /// Returns whether the user holds the named role.
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|role| role == name)
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address; must not already be registered.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Parameters for inserting a user row with an already-hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Password hash.
    pub password_hash: String,
}
