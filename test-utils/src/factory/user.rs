//! User factory for creating test user entities.
//!
//! Users are inserted with an already-hashed placeholder password; tests that exercise
//! hashing go through the user service instead.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("jane@example.com")
///     .first_name("Jane")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First{id}"`, last_name: `"Last{id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: `"hashed-password"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            email: format!("user{}@example.com", id),
            password: "hashed-password".to_string(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email address.
pub async fn create_user_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).build().await
}

/// Inserts a membership row linking a user to a role.
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate membership)
pub async fn add_user_to_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
