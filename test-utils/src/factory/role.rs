//! Role factory for creating test role entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with the given name.
///
/// Role names are unique, so tests creating several roles must pass distinct names.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Role name, stored as-is (e.g. `"ROLE_USER"`)
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
