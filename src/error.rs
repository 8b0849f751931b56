//! Error handler for the sign-up service.
//!
//! Covers startup failures. Request outcomes, including malformed payloads,
//! use [`crate::presentation::ControllerError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("SQL request failed: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Crypto(#[from] crate::infra::crypto::CryptoError),
}
