//! SeaORM entity definitions for the room rental schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relationships are
//! expressed through explicit foreign-key columns; the `user_role` join table carries
//! the many-to-many association between users and roles.

pub mod prelude;

pub mod booked_room;
pub mod role;
pub mod room;
pub mod user;
pub mod user_role;
