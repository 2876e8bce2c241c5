//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are
//! what the service layer works with. Parameter types describe the input of a single
//! operation.

pub mod availability;
pub mod booking;
pub mod role;
pub mod room;
pub mod user;
