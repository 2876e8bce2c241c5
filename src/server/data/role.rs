//! Role data repository for database operations.
//!
//! This module provides the `RoleRepository` for managing roles and their membership
//! rows in the `user_role` join table. Roles are returned with their members loaded.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::UserRepository,
    model::role::Role,
};

/// Repository providing database operations for roles and role membership.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a role with the given (already normalized) name.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role with no members
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn create(&self, name: String) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity, Vec::new()))
    }

    /// Gets all roles with their members, ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        let mut roles = Vec::with_capacity(entities.len());
        for entity in entities {
            roles.push(self.with_users(entity).await?);
        }

        Ok(roles)
    }

    /// Finds a role by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role found with its members
    /// - `Ok(None)` - No role with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        match entity::prelude::Role::find_by_id(id).one(self.db).await? {
            Some(entity) => Ok(Some(self.with_users(entity).await?)),
            None => Ok(None),
        }
    }

    /// Finds a role by its exact stored name.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role found with its members
    /// - `Ok(None)` - No role with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.with_users(entity).await?)),
            None => Ok(None),
        }
    }

    /// Checks whether a role with the exact stored name exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a role and all of its membership rows.
    ///
    /// Deleting a role that does not exist is not an error.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        self.remove_all_users(id).await?;

        entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks whether the user holds the role.
    pub async fn is_member(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::UserRole::find_by_id((user_id, role_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    /// Adds the user to the role.
    ///
    /// Adding an existing member leaves the single membership row in place.
    pub async fn add_user(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        if self.is_member(user_id, role_id).await? {
            return Ok(());
        }

        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the user from the role; a no-op when the user is not a member.
    pub async fn remove_user(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_by_id((user_id, role_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Removes every member from the role.
    pub async fn remove_all_users(&self, role_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn with_users(&self, entity: entity::role::Model) -> Result<Role, DbErr> {
        let user_ids: Vec<i32> = entity::prelude::UserRole::find()
            .select_only()
            .column(entity::user_role::Column::UserId)
            .filter(entity::user_role::Column::RoleId.eq(entity.id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let users = UserRepository::new(self.db).find_by_ids(user_ids).await?;

        Ok(Role::from_entity(entity, users))
    }
}
