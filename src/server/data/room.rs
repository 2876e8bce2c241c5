//! Room data repository for database operations.
//!
//! This module provides the `RoomRepository` for managing room records, including the
//! photo blob column and the available-room search that excludes rooms with overlapping
//! bookings.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::room::{CreateRoomParam, Room, UpdateRoomParam};

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoomRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    ///
    /// # Arguments
    /// - `param` - Room type, price, description and optional photo bytes
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            room_type: ActiveValue::Set(param.room_type),
            room_price: ActiveValue::Set(param.room_price),
            description: ActiveValue::Set(param.description),
            photo: ActiveValue::Set(param.photo),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Finds a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets all rooms ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets every distinct room type, sorted alphabetically.
    pub async fn find_distinct_room_types(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Room::find()
            .select_only()
            .column(entity::room::Column::RoomType)
            .distinct()
            .order_by_asc(entity::room::Column::RoomType)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Updates the provided fields of an existing room.
    ///
    /// Fields left as `None` in the parameters keep their stored value.
    ///
    /// # Arguments
    /// - `param` - Room ID and the fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The updated room
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateRoomParam) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::room::ActiveModel = room.into();
        if let Some(room_type) = param.room_type {
            active_model.room_type = ActiveValue::Set(room_type);
        }
        if let Some(room_price) = param.room_price {
            active_model.room_price = ActiveValue::Set(room_price);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(photo) = param.photo {
            active_model.photo = ActiveValue::Set(Some(photo));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(Room::from_entity(entity)))
    }

    /// Deletes a room together with its bookings.
    ///
    /// Deleting a room that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(())` - Room and bookings removed (or nothing to remove)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::BookedRoom::delete_many()
            .filter(entity::booked_room::Column::RoomId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Finds rooms of a matching type that are free over `[check_in_date, check_out_date)`.
    ///
    /// A room is excluded when any of its bookings starts before the requested check-out
    /// and ends after the requested check-in. The type filter is a literal substring match;
    /// `%` and `_` in `room_type` match only themselves.
    ///
    /// # Arguments
    /// - `check_in_date` - First night of the requested stay
    /// - `check_out_date` - Departure date of the requested stay
    /// - `room_type` - Substring matched against the room type
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Available rooms ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_available(
        &self,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        room_type: &str,
    ) -> Result<Vec<Room>, DbErr> {
        let booked_room_ids: Vec<i32> = entity::prelude::BookedRoom::find()
            .select_only()
            .column(entity::booked_room::Column::RoomId)
            .distinct()
            .filter(entity::booked_room::Column::CheckInDate.lt(check_out_date))
            .filter(entity::booked_room::Column::CheckOutDate.gt(check_in_date))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let room_type_pattern =
            LikeExpr::new(format!("%{}%", escape_like(room_type))).escape(LIKE_ESCAPE);
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomType.like(room_type_pattern));

        if !booked_room_ids.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(booked_room_ids));
        }

        let entities = query
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }
}

const LIKE_ESCAPE: char = '\\';

/// Escapes `%`, `_` and the escape character so they match literally in a LIKE pattern.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
