//! Room rental backend.
//!
//! Rooms, bookings, users and roles persisted through SeaORM, with the booking validation
//! and availability rules living in the service layer under [`server`].

pub mod server;
