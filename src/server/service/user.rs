//! User service for business logic.
//!
//! This module provides the `UserService` for registering, listing and deleting users.
//! Passwords are hashed through the injected `PasswordEncoder` and every new user receives
//! the default `ROLE_USER` role.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{config::ConfigError, AppError},
    model::{
        role::DEFAULT_USER_ROLE,
        user::{CreateUserParam, RegisterUserParam, User},
    },
    util::password::PasswordEncoder,
};

/// Service providing business logic for user management.
///
/// Holds the database connection and the password encoder used during registration.
pub struct UserService<'a, E: PasswordEncoder> {
    db: &'a DatabaseConnection,
    password_encoder: &'a E,
}

impl<'a, E: PasswordEncoder> UserService<'a, E> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `password_encoder` - Encoder used to hash passwords on registration
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, password_encoder: &'a E) -> Self {
        Self {
            db,
            password_encoder,
        }
    }

    /// Registers a new user with the default role.
    ///
    /// Checks email uniqueness and the presence of `ROLE_USER` before hashing the
    /// password or writing anything, so a failed registration leaves no rows behind.
    ///
    /// # Arguments
    /// - `param` - Names, email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user holding `ROLE_USER`
    /// - `Err(AppError::AlreadyExists)` - The email is already registered
    /// - `Err(AppError::ConfigErr)` - `ROLE_USER` has not been seeded
    /// - `Err(AppError::InternalError)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn register_user(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        if user_repo.exists_by_email(&param.email).await? {
            return Err(AppError::AlreadyExists(format!(
                "{} already exists",
                param.email
            )));
        }

        let user_role = role_repo
            .find_by_name(DEFAULT_USER_ROLE)
            .await?
            .ok_or_else(|| ConfigError::MissingDefaultRole(DEFAULT_USER_ROLE.to_string()))?;

        let password_hash = self.password_encoder.encode(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash,
            })
            .await?;

        role_repo.add_user(user.id, user_role.id).await?;

        tracing::info!("Registered user {}", user.email);

        user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Gets every registered user.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;
        Ok(users)
    }

    /// Gets a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with role names
    /// - `Err(AppError::NotFound)` - No user registered with that email
    pub async fn get_user(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Deletes a user by email after confirming they exist.
    ///
    /// # Returns
    /// - `Ok(())` - User and role memberships removed
    /// - `Err(AppError::NotFound)` - No user registered with that email
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let user = self.get_user(email).await?;

        UserRepository::new(self.db)
            .delete_by_email(&user.email)
            .await?;

        tracing::info!("Deleted user {}", user.email);

        Ok(())
    }
}
