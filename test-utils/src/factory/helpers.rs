//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique emails, names and
/// confirmation codes across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room and a single booking for it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, booking))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_room(
    db: &DatabaseConnection,
) -> Result<(entity::room::Model, entity::booked_room::Model), DbErr> {
    let room = crate::factory::room::create_room(db).await?;
    let booking = crate::factory::booked_room::create_booking(db, room.id).await?;

    Ok((room, booking))
}

/// Creates a user that is a member of the named role, creating the role as well.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - Name of the role to create
///
/// # Returns
/// - `Ok((role, user))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_in_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<(entity::role::Model, entity::user::Model), DbErr> {
    let role = crate::factory::role::create_role(db, role_name).await?;
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::user::add_user_to_role(db, user.id, role.id).await?;

    Ok((role, user))
}
