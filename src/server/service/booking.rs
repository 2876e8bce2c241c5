//! Booking service for business logic.
//!
//! This module provides the `BookingService`, which owns the booking rules: a stay must
//! end after it starts, the room must exist, and the requested dates must not overlap an
//! existing booking of the same room. Saved bookings receive a generated confirmation
//! code that guests use to look them up.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::{
        availability::{room_is_available, DateRange},
        booking::{BookedRoom, BookingRequestParam, CreateBookingParam},
    },
    util::confirmation_code::generate_confirmation_code,
};

/// Service providing business logic for room bookings.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every booking.
    pub async fn get_all_bookings(&self) -> Result<Vec<BookedRoom>, AppError> {
        let bookings = BookingRepository::new(self.db).find_all().await?;
        Ok(bookings)
    }

    /// Gets every booking for a room.
    pub async fn get_all_bookings_by_room_id(
        &self,
        room_id: i32,
    ) -> Result<Vec<BookedRoom>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .find_by_room_id(room_id)
            .await?;
        Ok(bookings)
    }

    /// Gets every booking made with a guest email.
    pub async fn get_bookings_by_user_email(
        &self,
        email: &str,
    ) -> Result<Vec<BookedRoom>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .find_by_guest_email(email)
            .await?;
        Ok(bookings)
    }

    /// Cancels a booking.
    ///
    /// Cancelling a booking that does not exist succeeds without error.
    ///
    /// # Arguments
    /// - `booking_id` - ID of the booking to remove
    ///
    /// # Returns
    /// - `Ok(())` - Booking removed or already absent
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn cancel_booking(&self, booking_id: i32) -> Result<(), AppError> {
        BookingRepository::new(self.db)
            .delete_by_id(booking_id)
            .await?;

        tracing::info!("Cancelled booking {}", booking_id);

        Ok(())
    }

    /// Validates and saves a booking for a room.
    ///
    /// The date range and guest counts are checked before any database access. The room
    /// must exist and
    /// have no booking overlapping the requested stay. On success a confirmation code is
    /// generated and the booking is persisted.
    ///
    /// # Arguments
    /// - `room_id` - ID of the room to book
    /// - `request` - Guest details and requested dates
    ///
    /// # Returns
    /// - `Ok(BookedRoom)` - The saved booking including its confirmation code
    /// - `Err(AppError::BadRequest)` - Check-out is not after check-in, a guest count is
    ///   negative or too large, or the room is already booked for part of the stay
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn save_booking(
        &self,
        room_id: i32,
        request: BookingRequestParam,
    ) -> Result<BookedRoom, AppError> {
        let requested = DateRange::new(request.check_in_date, request.check_out_date)?;
        let total_num_of_guests = request.total_num_of_guests()?;

        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", room_id)))?;

        let booking_repo = BookingRepository::new(self.db);
        let existing_bookings = booking_repo.find_by_room_id(room.id).await?;

        if !room_is_available(&requested, &existing_bookings) {
            tracing::debug!(
                "Rejected booking for room {} from {} to {}: dates overlap an existing booking",
                room.id,
                requested.check_in(),
                requested.check_out()
            );
            return Err(AppError::BadRequest(
                "Sorry, this room is not available for the selected dates".to_string(),
            ));
        }

        let booking = booking_repo
            .create(CreateBookingParam {
                room_id: room.id,
                guest_full_name: request.guest_full_name,
                guest_email: request.guest_email,
                check_in_date: request.check_in_date,
                check_out_date: request.check_out_date,
                num_of_adults: request.num_of_adults,
                num_of_children: request.num_of_children,
                total_num_of_guests,
                confirmation_code: generate_confirmation_code(),
            })
            .await?;

        tracing::info!(
            "Booked room {} from {} to {} with confirmation code {}",
            booking.room_id,
            booking.check_in_date,
            booking.check_out_date,
            booking.confirmation_code
        );

        Ok(booking)
    }

    /// Finds a booking by its confirmation code.
    ///
    /// # Returns
    /// - `Ok(BookedRoom)` - The matching booking
    /// - `Err(AppError::NotFound)` - No booking carries that code
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_confirmation_code(
        &self,
        confirmation_code: &str,
    ) -> Result<BookedRoom, AppError> {
        BookingRepository::new(self.db)
            .find_by_confirmation_code(confirmation_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No booking found with booking code: {}",
                    confirmation_code
                ))
            })
    }

    /// Checks whether a room is free for the given stay.
    ///
    /// # Arguments
    /// - `room_id` - ID of the room to check
    /// - `check_in_date` - First night of the stay
    /// - `check_out_date` - Departure date
    ///
    /// # Returns
    /// - `Ok(true)` - No booking overlaps the stay
    /// - `Ok(false)` - At least one booking overlaps the stay
    /// - `Err(AppError::BadRequest)` - Check-out is not after check-in
    /// - `Err(AppError::NotFound)` - No room with that ID
    pub async fn is_room_available(
        &self,
        room_id: i32,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
    ) -> Result<bool, AppError> {
        let requested = DateRange::new(check_in_date, check_out_date)?;

        if RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Room with id {} not found",
                room_id
            )));
        }

        let existing_bookings = BookingRepository::new(self.db)
            .find_by_room_id(room_id)
            .await?;

        Ok(room_is_available(&requested, &existing_bookings))
    }
}
