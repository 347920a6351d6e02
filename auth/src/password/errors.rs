use thiserror::Error;

/// Error type for password operations.
///
/// A password that simply does not match is not an error: `verify` returns
/// `Ok(false)` for it. These variants cover broken inputs and configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),
}
