use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed identity claim carried inside an access token.
///
/// Only the subject and the validity window are encoded; anything else about
/// the principal is looked up again when the token is presented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject valid from `issued_at` for `ttl`.
    ///
    /// A negative `ttl` yields a claim that is already expired.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the claim is expired at `current_timestamp`.
    ///
    /// The expiry instant itself is already outside the validity window.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
