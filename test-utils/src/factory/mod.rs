//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let room = factory::room::create_room(&db).await?;
//!     let booking = factory::booked_room::create_booking(&db, room.id).await?;
//!
//!     let (room, booking) = factory::helpers::create_booking_with_room(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booked_room::BookedRoomFactory::new(&db, room.id)
//!     .guest_email("guest@example.com")
//!     .dates(check_in, check_out)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `room` - Create room entities
//! - `booked_room` - Create booking entities tied to a room
//! - `role` - Create role entities
//! - `user` - Create user entities and role memberships
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod booked_room;
pub mod helpers;
pub mod role;
pub mod room;
pub mod user;

pub use booked_room::create_booking;
pub use role::create_role;
pub use room::create_room;
pub use user::{add_user_to_role, create_user};
