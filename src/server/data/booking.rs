//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for persisting bookings and looking them
//! up by room, guest email and confirmation code.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{BookedRoom, CreateBookingParam};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking for a room.
    ///
    /// No validation happens here; the booking service checks dates, guest counts and
    /// availability before calling this.
    ///
    /// # Arguments
    /// - `param` - Room ID, guest details, date range, guest total and confirmation code
    ///
    /// # Returns
    /// - `Ok(BookedRoom)` - The created booking
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate confirmation code)
    pub async fn create(&self, param: CreateBookingParam) -> Result<BookedRoom, DbErr> {
        let entity = entity::booked_room::ActiveModel {
            room_id: ActiveValue::Set(param.room_id),
            guest_full_name: ActiveValue::Set(param.guest_full_name),
            guest_email: ActiveValue::Set(param.guest_email),
            check_in_date: ActiveValue::Set(param.check_in_date),
            check_out_date: ActiveValue::Set(param.check_out_date),
            num_of_adults: ActiveValue::Set(param.num_of_adults),
            num_of_children: ActiveValue::Set(param.num_of_children),
            total_num_of_guests: ActiveValue::Set(param.total_num_of_guests),
            confirmation_code: ActiveValue::Set(param.confirmation_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BookedRoom::from_entity(entity))
    }

    /// Gets all bookings ordered by check-in date.
    pub async fn find_all(&self) -> Result<Vec<BookedRoom>, DbErr> {
        let entities = entity::prelude::BookedRoom::find()
            .order_by_asc(entity::booked_room::Column::CheckInDate)
            .order_by_asc(entity::booked_room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BookedRoom::from_entity).collect())
    }

    /// Gets all bookings for a room ordered by check-in date.
    pub async fn find_by_room_id(&self, room_id: i32) -> Result<Vec<BookedRoom>, DbErr> {
        let entities = entity::prelude::BookedRoom::find()
            .filter(entity::booked_room::Column::RoomId.eq(room_id))
            .order_by_asc(entity::booked_room::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BookedRoom::from_entity).collect())
    }

    /// Gets all bookings made with the given guest email, ordered by check-in date.
    pub async fn find_by_guest_email(&self, email: &str) -> Result<Vec<BookedRoom>, DbErr> {
        let entities = entity::prelude::BookedRoom::find()
            .filter(entity::booked_room::Column::GuestEmail.eq(email))
            .order_by_asc(entity::booked_room::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BookedRoom::from_entity).collect())
    }

    /// Finds a booking by its confirmation code.
    ///
    /// # Returns
    /// - `Ok(Some(BookedRoom))` - Booking found
    /// - `Ok(None)` - No booking carries that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_confirmation_code(
        &self,
        confirmation_code: &str,
    ) -> Result<Option<BookedRoom>, DbErr> {
        let entity = entity::prelude::BookedRoom::find()
            .filter(entity::booked_room::Column::ConfirmationCode.eq(confirmation_code))
            .one(self.db)
            .await?;

        Ok(entity.map(BookedRoom::from_entity))
    }

    /// Deletes a booking by ID.
    ///
    /// Deleting a booking that does not exist is not an error.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BookedRoom::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
