//! Room Rental Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the room
//! rental backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for inserting entities with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for rooms, bookings, roles and users
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Room;
//!
//! #[tokio::test]
//! async fn test_room_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Room)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
