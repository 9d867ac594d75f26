//! Error Types
//!
//! Failure taxonomy for the client. Every failure is converted into a
//! human-readable message at the call site; nothing propagates past the
//! component that triggered it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Bad credentials. Kept generic so nothing leaks about which field
    /// was wrong.
    #[error("Login failed. Check your credentials.")]
    Auth,

    /// A required field is missing; caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// Transport error or non-2xx response.
    #[error("{0}")]
    Network(String),

    /// Client-side policy check failed (e.g. assignee outside the team).
    #[error("{0}")]
    Policy(String),
}

pub type AppResult<T> = Result<T, AppError>;
