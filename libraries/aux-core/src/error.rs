/// Core error types for the Aux client
use thiserror::Error;

/// Result type alias using `AuxError`
pub type Result<T> = std::result::Result<T, AuxError>;

/// Core error type shared across the Aux client crates
#[derive(Error, Debug)]
pub enum AuxError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid or malformed data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl AuxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<serde_json::Error> for AuxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AuxError::not_found("User", "u42");
        assert_eq!(format!("{}", error), "User not found: u42");

        let error = AuxError::storage("disk full");
        assert!(format!("{}", error).contains("disk full"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuxError>();
    }
}
