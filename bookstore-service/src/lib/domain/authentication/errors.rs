use thiserror::Error;

use crate::domain::seller::models::SellerId;

/// Errors raised while signing in or resolving the caller behind a token.
///
/// `AuthenticationFailed` never says which check failed, and `InvalidToken`
/// never says whether the token was forged, malformed or expired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    AuthenticationFailed,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error("Seller not found: {0}")]
    PrincipalNotFound(SellerId),

    #[error("Stored credential is unusable: {0}")]
    CorruptCredential(String),

    #[error("Credential check aborted: {0}")]
    CredentialCheckAborted(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
