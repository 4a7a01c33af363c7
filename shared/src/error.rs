use thiserror::Error;

/// Failures surfaced by the user record operations. The display string of each
/// variant is the exact message returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("invalid user data")]
    InvalidUserData,
    #[error("invalid email")]
    InvalidEmail,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user does not exist")]
    UserDoesNotExist,
    #[error("failed to fetch record")]
    FailedToFetchRecord,
    #[error("failed to unmarshal record")]
    FailedToUnmarshalRecord,
    #[error("could not update record")]
    CouldNotPutItem,
    #[error("fail to marshal record")]
    CouldNotMarshalItem,
    #[error("failed to delete record")]
    FailedToDeleteRecord,
}

/// Opaque failure from the backing store (timeouts, throttling, I/O).
#[derive(Debug, Error)]
#[error("store error: {source}")]
pub struct StoreError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StoreError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self {
            source: source.into(),
        }
    }
}
