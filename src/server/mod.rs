//! Server-side business logic and data access.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business rules: booking validation, availability,
//!   role membership and user registration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations and seed data
//! - **Util** (`util/`) - Password hashing and confirmation code generation
//!
//! # Call Flow
//!
//! 1. **Caller** builds a parameter model and invokes a service with a borrowed connection
//! 2. **Service** validates input, then orchestrates one or more repository calls
//! 3. **Data** queries the database and converts entities to domain models
//! 4. **Service** returns the domain model or a typed `AppError`

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
