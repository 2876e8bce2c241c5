//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Users are
//! returned together with the names of their roles, loaded from the `user_role` join
//! table in one batch per query.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user without any roles.
    ///
    /// # Arguments
    /// - `param` - Names, email and password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with an empty role list
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate email)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity, Vec::new()))
    }

    /// Gets all users ordered by email.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        self.with_roles(entities).await
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with role names
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        self.single_with_roles(entity).await
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with role names
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        self.single_with_roles(entity).await
    }

    /// Gets the users with the given IDs ordered by email.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .order_by_asc(entity::user::Column::Email)
            .all(self.db)
            .await?;

        self.with_roles(entities).await
    }

    /// Checks whether a user is registered with the given email.
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user and their role memberships by email.
    ///
    /// Deleting an unknown email is not an error.
    pub async fn delete_by_email(&self, email: &str) -> Result<(), DbErr> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user.id))
            .exec(self.db)
            .await?;

        entity::prelude::User::delete_by_id(user.id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn single_with_roles(
        &self,
        entity: Option<entity::user::Model>,
    ) -> Result<Option<User>, DbErr> {
        match entity {
            Some(entity) => Ok(self.with_roles(vec![entity]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Attaches sorted role names to each user entity, preserving input order.
    async fn with_roles(&self, entities: Vec<entity::user::Model>) -> Result<Vec<User>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let memberships = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await?;

        let role_ids: Vec<i32> = memberships.iter().map(|m| m.role_id).collect();
        let role_names: HashMap<i32, String> = if role_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Role::find()
                .filter(entity::role::Column::Id.is_in(role_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|r| (r.id, r.name))
                .collect()
        };

        let mut roles_by_user: HashMap<i32, Vec<String>> = HashMap::new();
        for membership in memberships {
            if let Some(name) = role_names.get(&membership.role_id) {
                roles_by_user
                    .entry(membership.user_id)
                    .or_default()
                    .push(name.clone());
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let mut roles = roles_by_user.remove(&entity.id).unwrap_or_default();
                roles.sort();
                User::from_entity(entity, roles)
            })
            .collect())
    }
}
