//! Room domain models and parameters.
//!
//! Rooms are the bookable resource: a type label, a nightly price, an optional
//! description and an optional photo stored as raw bytes.

use chrono::NaiveDate;
use sea_orm::prelude::Decimal;

/// A bookable room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Database ID of the room.
    pub id: i32,
    /// Free-form room type label (e.g. "Single", "Double Suite").
    pub room_type: String,
    /// Price per night; never negative.
    pub room_price: Decimal,
    /// Optional description shown to guests.
    pub description: Option<String>,
    /// Raw photo bytes, if a photo has been uploaded.
    pub photo: Option<Vec<u8>>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Room` - The converted room domain model
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_type: entity.room_type,
            room_price: entity.room_price,
            description: entity.description,
            photo: entity.photo,
        }
    }
}

/// Parameters for adding a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    /// Room type label.
    pub room_type: String,
    /// Price per night; rejected when negative.
    pub room_price: Decimal,
    /// Optional description.
    pub description: Option<String>,
    /// Optional photo bytes.
    pub photo: Option<Vec<u8>>,
}

/// Parameters for updating an existing room.
///
/// Every field except `id` is optional; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParam {
    /// ID of the room to update.
    pub id: i32,
    /// New room type label.
    pub room_type: Option<String>,
    /// New price per night; rejected when negative.
    pub room_price: Option<Decimal>,
    /// New description.
    pub description: Option<String>,
    /// Replacement photo bytes.
    pub photo: Option<Vec<u8>>,
}

/// Parameters for searching rooms free over a date range.
#[derive(Debug, Clone)]
pub struct AvailableRoomsParam {
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Departure date; the room is free again on this date.
    pub check_out_date: NaiveDate,
    /// Substring matched against the room type.
    pub room_type: String,
}
