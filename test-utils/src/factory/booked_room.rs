//! Booking factory for creating test booked room entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Every booking belongs to a room, so the room ID is required up front.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookedRoomFactory::new(&db, room.id)
///     .guest_email("guest@example.com")
///     .dates(check_in, check_out)
///     .confirmation_code("ABC123")
///     .build()
///     .await?;
/// ```
pub struct BookedRoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    guest_full_name: String,
    guest_email: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    num_of_adults: i32,
    num_of_children: i32,
    confirmation_code: String,
}

impl<'a> BookedRoomFactory<'a> {
    /// Creates a new BookedRoomFactory with default values.
    ///
    /// Defaults:
    /// - guest_full_name: `"Guest {id}"`
    /// - guest_email: `"guest{id}@example.com"`
    /// - check_in_date: today, check_out_date: two days later
    /// - num_of_adults: `1`, num_of_children: `0`
    /// - confirmation_code: `"CODE{id}"`
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            room_id,
            guest_full_name: format!("Guest {}", id),
            guest_email: format!("guest{}@example.com", id),
            check_in_date: today,
            check_out_date: today + Duration::days(2),
            num_of_adults: 1,
            num_of_children: 0,
            confirmation_code: format!("CODE{}", id),
        }
    }

    pub fn guest_full_name(mut self, guest_full_name: impl Into<String>) -> Self {
        self.guest_full_name = guest_full_name.into();
        self
    }

    pub fn guest_email(mut self, guest_email: impl Into<String>) -> Self {
        self.guest_email = guest_email.into();
        self
    }

    /// Sets the check-in and check-out dates for the booking.
    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    /// Sets the number of adult and child guests.
    pub fn guests(mut self, num_of_adults: i32, num_of_children: i32) -> Self {
        self.num_of_adults = num_of_adults;
        self.num_of_children = num_of_children;
        self
    }

    pub fn confirmation_code(mut self, confirmation_code: impl Into<String>) -> Self {
        self.confirmation_code = confirmation_code.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booked_room::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert (e.g. room does not exist)
    pub async fn build(self) -> Result<entity::booked_room::Model, DbErr> {
        entity::booked_room::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            guest_full_name: ActiveValue::Set(self.guest_full_name),
            guest_email: ActiveValue::Set(self.guest_email),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            num_of_adults: ActiveValue::Set(self.num_of_adults),
            num_of_children: ActiveValue::Set(self.num_of_children),
            total_num_of_guests: ActiveValue::Set(self.num_of_adults + self.num_of_children),
            confirmation_code: ActiveValue::Set(self.confirmation_code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking for the given room with default values.
///
/// Shorthand for `BookedRoomFactory::new(db, room_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::booked_room::Model, DbErr> {
    BookedRoomFactory::new(db, room_id).build().await
}

/// Creates a booking for the given room covering `[check_in_date, check_out_date)`.
pub async fn create_booking_for_dates(
    db: &DatabaseConnection,
    room_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
) -> Result<entity::booked_room::Model, DbErr> {
    BookedRoomFactory::new(db, room_id)
        .dates(check_in_date, check_out_date)
        .build()
        .await
}
