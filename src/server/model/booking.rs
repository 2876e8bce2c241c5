//! Booking domain models and parameters.
//!
//! A booking ties a guest and a date range to exactly one room and is identified to the
//! guest by its confirmation code.

use chrono::NaiveDate;

use crate::server::{error::AppError, model::availability::DateRange};

/// A persisted room booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedRoom {
    /// Database ID of the booking.
    pub id: i32,
    /// ID of the booked room.
    pub room_id: i32,
    /// Guest's full name.
    pub guest_full_name: String,
    /// Guest's email, used to list a guest's bookings.
    pub guest_email: String,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Departure date (exclusive end of the stay).
    pub check_out_date: NaiveDate,
    /// Number of adult guests.
    pub num_of_adults: i32,
    /// Number of child guests.
    pub num_of_children: i32,
    /// Adults plus children.
    pub total_num_of_guests: i32,
    /// Unique code the guest uses to look up the booking.
    pub confirmation_code: String,
}

impl BookedRoom {
    /// Converts an entity model to a booking domain model at the repository boundary.
    pub fn from_entity(entity: entity::booked_room::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            guest_full_name: entity.guest_full_name,
            guest_email: entity.guest_email,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            num_of_adults: entity.num_of_adults,
            num_of_children: entity.num_of_children,
            total_num_of_guests: entity.total_num_of_guests,
            confirmation_code: entity.confirmation_code,
        }
    }

    /// Returns the half-open date range `[check_in_date, check_out_date)` of the stay.
    pub fn date_range(&self) -> DateRange {
        DateRange::from_stored(self.check_in_date, self.check_out_date)
    }
}

/// Guest-supplied booking request.
///
/// The room ID and confirmation code are not part of the request; the room comes from the
/// caller and the code is generated when the booking is saved.
#[derive(Debug, Clone)]
pub struct BookingRequestParam {
    /// Guest's full name.
    pub guest_full_name: String,
    /// Guest's email.
    pub guest_email: String,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Departure date; must come after `check_in_date`.
    pub check_out_date: NaiveDate,
    /// Number of adult guests.
    pub num_of_adults: i32,
    /// Number of child guests.
    pub num_of_children: i32,
}

impl BookingRequestParam {
    /// Total number of guests covered by the request.
    ///
    /// # Returns
    /// - `Ok(i32)` - Adults plus children
    /// - `Err(AppError::BadRequest)` - A count is negative or the sum does not fit in an `i32`
    pub fn total_num_of_guests(&self) -> Result<i32, AppError> {
        if self.num_of_adults < 0 || self.num_of_children < 0 {
            return Err(AppError::BadRequest(
                "Number of guests must not be negative".to_string(),
            ));
        }

        self.num_of_adults
            .checked_add(self.num_of_children)
            .ok_or_else(|| AppError::BadRequest("Number of guests is too large".to_string()))
    }
}

/// Parameters for inserting a booking row that has already been validated.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    /// ID of the booked room.
    pub room_id: i32,
    /// Guest's full name.
    pub guest_full_name: String,
    /// Guest's email.
    pub guest_email: String,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Departure date.
    pub check_out_date: NaiveDate,
    /// Number of adult guests.
    pub num_of_adults: i32,
    /// Number of child guests.
    pub num_of_children: i32,
    /// Adults plus children.
    pub total_num_of_guests: i32,
    /// Generated confirmation code.
    pub confirmation_code: String,
}
