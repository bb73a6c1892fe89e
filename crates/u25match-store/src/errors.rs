//! Error helpers for u25match-store
//!
//! Wraps u25match-core ExError with backend-specific constructors

use u25match_core::errors::{ExError, ExErrorKind, ProfileError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an HTTP transport error from reqwest::Error
pub fn from_reqwest(op: &str, err: reqwest::Error) -> ExError {
    let kind = if err.is_timeout() {
        ExErrorKind::Timeout
    } else if err.is_decode() {
        ExErrorKind::Serialization
    } else {
        ExErrorKind::ExternalService
    };
    let ex = ExError::new(kind).with_op(op).with_message(err.to_string());
    match err.status() {
        Some(status) => ex.with_status(status.as_u16()),
        None => ex,
    }
}

/// Create an error for a non-2xx HTTP response
pub fn http_status(op: &str, uid: &str, status: u16, body: &str) -> ExError {
    if status == 404 {
        return ExError::from(ProfileError::ProfileNotFound {
            uid: uid.to_string(),
        })
        .with_op(op)
        .with_status(status);
    }
    ExError::new(ExErrorKind::ExternalService)
        .with_op(op)
        .with_uid(uid)
        .with_status(status)
        .with_message(format!("Profile API error: {}", body))
}

/// Create a serialization error
pub fn serialization(op: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(op)
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(key: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_field(key)
        .with_message(reason.to_string())
}
