//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between callers
//! and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking date validation, availability and role/user rules
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than entity models

pub mod booking;
pub mod role;
pub mod room;
pub mod user;
