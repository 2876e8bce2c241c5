//! Role service for business logic.
//!
//! This module provides the `RoleService` for creating roles and managing which users
//! hold them. Role names are normalized before they are stored or compared.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::AppError,
    model::{
        role::{normalize_role_name, Role},
        user::User,
    },
};

/// Service providing business logic for roles and role membership.
pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    /// Creates a new RoleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every role with its members.
    pub async fn get_roles(&self) -> Result<Vec<Role>, AppError> {
        let roles = RoleRepository::new(self.db).find_all().await?;
        Ok(roles)
    }

    /// Creates a role from a name that is normalized to `ROLE_<NAME>`.
    ///
    /// # Arguments
    /// - `name` - Role name with or without the `ROLE_` prefix
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(AppError::AlreadyExists)` - A role with the normalized name exists
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create_role(&self, name: &str) -> Result<Role, AppError> {
        let role_name = normalize_role_name(name);
        let role_repo = RoleRepository::new(self.db);

        if role_repo.exists_by_name(&role_name).await? {
            return Err(AppError::AlreadyExists(format!(
                "{} role already exists",
                role_name
            )));
        }

        let role = role_repo.create(role_name).await?;

        tracing::info!("Created role {}", role.name);

        Ok(role)
    }

    /// Deletes a role after removing all of its members.
    ///
    /// Deleting an unknown role succeeds without error.
    pub async fn delete_role(&self, role_id: i32) -> Result<(), AppError> {
        RoleRepository::new(self.db).delete_by_id(role_id).await?;

        tracing::info!("Deleted role {}", role_id);

        Ok(())
    }

    /// Finds a role by name.
    ///
    /// # Returns
    /// - `Ok(Role)` - The role with its members
    /// - `Err(AppError::NotFound)` - No role with that name
    pub async fn find_by_name(&self, name: &str) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", name)))
    }

    /// Adds a user to a role.
    ///
    /// Assigning a role the user already holds leaves a single membership in place.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `role_id` - ID of the role
    ///
    /// # Returns
    /// - `Ok(User)` - The user with refreshed role names
    /// - `Err(AppError::NotFound)` - User or role does not exist
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn assign_role_to_user(&self, user_id: i32, role_id: i32) -> Result<User, AppError> {
        let (user, role) = self.require_user_and_role(user_id, role_id).await?;

        if role.has_user(user.id) {
            tracing::debug!("User {} already holds role {}", user.email, role.name);
        } else {
            RoleRepository::new(self.db)
                .add_user(user.id, role.id)
                .await?;
            tracing::info!("Assigned role {} to user {}", role.name, user.email);
        }

        UserRepository::new(self.db)
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Removes a user from a role.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `role_id` - ID of the role
    ///
    /// # Returns
    /// - `Ok(User)` - The user with refreshed role names
    /// - `Err(AppError::NotFound)` - User or role does not exist, or the user does not
    ///   hold the role
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn remove_user_from_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<User, AppError> {
        let (user, role) = self.require_user_and_role(user_id, role_id).await?;

        if !role.has_user(user.id) {
            return Err(AppError::NotFound(format!(
                "User {} does not hold role {}",
                user.email, role.name
            )));
        }

        RoleRepository::new(self.db)
            .remove_user(user.id, role.id)
            .await?;
        tracing::info!("Removed role {} from user {}", role.name, user.email);

        UserRepository::new(self.db)
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Removes every member from a role.
    ///
    /// # Returns
    /// - `Ok(Role)` - The role with an empty member list
    /// - `Err(AppError::NotFound)` - No role with that ID
    pub async fn remove_all_users_from_role(&self, role_id: i32) -> Result<Role, AppError> {
        let role_repo = RoleRepository::new(self.db);

        let role = role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        role_repo.remove_all_users(role.id).await?;
        tracing::info!("Removed {} users from role {}", role.users.len(), role.name);

        Ok(Role {
            users: Vec::new(),
            ..role
        })
    }

    async fn require_user_and_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<(User, Role), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let role = RoleRepository::new(self.db)
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        Ok((user, role))
    }
}
