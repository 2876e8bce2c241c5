//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{prelude::Decimal, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db)
///     .room_type("Suite")
///     .price(Decimal::new(25000, 2))
///     .photo(vec![0xFF, 0xD8])
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_type: String,
    room_price: Decimal,
    description: Option<String>,
    photo: Option<Vec<u8>>,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_type: `"Single"`
    /// - room_price: `100.00`
    /// - description: `"Room {id}"`
    /// - photo: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            room_type: "Single".to_string(),
            room_price: Decimal::new(10000, 2),
            description: Some(format!("Room {}", id)),
            photo: None,
        }
    }

    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    pub fn price(mut self, room_price: Decimal) -> Self {
        self.room_price = room_price;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn photo(mut self, photo: Vec<u8>) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_type: ActiveValue::Set(self.room_type),
            room_price: ActiveValue::Set(self.room_price),
            description: ActiveValue::Set(self.description),
            photo: ActiveValue::Set(self.photo),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
///
/// Shorthand for `RoomFactory::new(db).build().await`.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}

/// Creates a room of the given type with default values otherwise.
pub async fn create_room_of_type(
    db: &DatabaseConnection,
    room_type: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).room_type(room_type).build().await
}
