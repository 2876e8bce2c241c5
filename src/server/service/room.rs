//! Room service for business logic.
//!
//! Provides room management on top of `RoomRepository`: price validation, photo access
//! and the available-room search.

use sea_orm::{prelude::Decimal, DatabaseConnection};

use crate::server::{
    data::room::RoomRepository,
    error::AppError,
    model::{
        availability::DateRange,
        room::{AvailableRoomsParam, CreateRoomParam, Room, UpdateRoomParam},
    },
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new room, optionally with a photo.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError::BadRequest)` - Price is negative
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn add_new_room(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        validate_price(param.room_price)?;

        let room = RoomRepository::new(self.db).create(param).await?;

        tracing::info!("Added room {} of type {}", room.id, room.room_type);

        Ok(room)
    }

    /// Gets every distinct room type.
    pub async fn get_all_room_types(&self) -> Result<Vec<String>, AppError> {
        let room_types = RoomRepository::new(self.db)
            .find_distinct_room_types()
            .await?;
        Ok(room_types)
    }

    /// Gets every room.
    pub async fn get_all_rooms(&self) -> Result<Vec<Room>, AppError> {
        let rooms = RoomRepository::new(self.db).find_all().await?;
        Ok(rooms)
    }

    /// Gets a room by ID, or `None` when it does not exist.
    pub async fn get_room_by_id(&self, room_id: i32) -> Result<Option<Room>, AppError> {
        let room = RoomRepository::new(self.db).find_by_id(room_id).await?;
        Ok(room)
    }

    /// Reads the photo bytes of a room.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - The stored photo
    /// - `Ok(None)` - The room has no photo
    /// - `Err(AppError::NotFound)` - No room with that ID
    pub async fn get_room_photo_by_room_id(
        &self,
        room_id: i32,
    ) -> Result<Option<Vec<u8>>, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Sorry, Room not found!".to_string()))?;

        Ok(room.photo)
    }

    /// Updates the provided fields of a room.
    ///
    /// # Returns
    /// - `Ok(Room)` - The updated room
    /// - `Err(AppError::BadRequest)` - New price is negative
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_room(&self, param: UpdateRoomParam) -> Result<Room, AppError> {
        if let Some(room_price) = param.room_price {
            validate_price(room_price)?;
        }

        let room_id = param.id;
        RoomRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id {} not found", room_id)))
    }

    /// Deletes a room and its bookings; deleting an unknown room succeeds.
    pub async fn delete_room(&self, room_id: i32) -> Result<(), AppError> {
        RoomRepository::new(self.db).delete_by_id(room_id).await?;

        tracing::info!("Deleted room {}", room_id);

        Ok(())
    }

    /// Finds rooms of a type that have no booking overlapping the requested stay.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Matching available rooms
    /// - `Err(AppError::BadRequest)` - Check-out is not after check-in
    pub async fn get_available_rooms(
        &self,
        param: AvailableRoomsParam,
    ) -> Result<Vec<Room>, AppError> {
        let requested = DateRange::new(param.check_in_date, param.check_out_date)?;

        let rooms = RoomRepository::new(self.db)
            .find_available(
                requested.check_in(),
                requested.check_out(),
                &param.room_type,
            )
            .await?;

        Ok(rooms)
    }
}

fn validate_price(room_price: Decimal) -> Result<(), AppError> {
    if room_price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Room price must not be negative".to_string(),
        ));
    }

    Ok(())
}
