//! Room availability rules.
//!
//! Stays are half-open date ranges: a guest occupies the room from the check-in date up
//! to, but not including, the check-out date. Two stays conflict only when those ranges
//! intersect, so a guest may check in on the day the previous guest checks out.

use chrono::NaiveDate;

use crate::server::{error::AppError, model::booking::BookedRoom};

/// A validated stay `[check_in, check_out)` with `check_in < check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Builds a date range from caller-supplied dates.
    ///
    /// # Arguments
    /// - `check_in` - First night of the stay
    /// - `check_out` - Departure date
    ///
    /// # Returns
    /// - `Ok(DateRange)` - The dates form a non-empty range
    /// - `Err(AppError::BadRequest)` - Check-out is on or before check-in
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, AppError> {
        if check_in >= check_out {
            return Err(AppError::BadRequest(
                "Check-in date must come before check-out date".to_string(),
            ));
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Wraps dates read back from storage, which were validated when the booking was saved.
    pub(crate) fn from_stored(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns whether two stays share at least one night.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// Returns whether a room with the given bookings is free for the requested stay.
///
/// # Arguments
/// - `requested` - The stay being asked for
/// - `existing_bookings` - All bookings currently held for the room
///
/// # Returns
/// - `true` - No existing booking overlaps the requested stay
/// - `false` - At least one booking conflicts
pub fn room_is_available(requested: &DateRange, existing_bookings: &[BookedRoom]) -> bool {
    existing_bookings
        .iter()
        .all(|booking| !booking.date_range().overlaps(requested))
}
