//! Error types for the service layer.
//!
//! `AppError` is the top-level error returned by every service method. Repository
//! methods return `sea_orm::DbErr`, which converts into `AppError` through `?`.

pub mod config;

use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Callers
/// match on the variant to decide how to surface the failure; nothing is retried
/// internally.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or a missing default role.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation, such as a taken email or an existing role name.
    ///
    /// # Fields
    /// - Message describing the conflicting value
    #[error("{0}")]
    AlreadyExists(String),

    /// Invalid request error.
    ///
    /// Caller-supplied data failed validation, e.g. a check-out date that does not
    /// come after check-in, a negative price or a room that is already booked.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}
