use thiserror::Error;

/// Application-level error type.
///
/// Navigation and dashboard composition are total functions and never return
/// errors; everything here originates in the sign-in flow, the state store,
/// or a superseded content load.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Sign-in rejected: {0}")]
    Unauthorized(String),

    #[error("State store error: {0}")]
    Store(String),

    #[error("Load superseded by a later navigation")]
    Cancelled,
}
