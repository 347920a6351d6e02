use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Token type label returned alongside every access token.
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Authentication coordinator combining password verification and JWT generation.
///
/// Holds only process-wide settings (key, algorithm, cost parameters, token
/// lifetime) and no per-request state.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    access_token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Always `"bearer"`
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_handler` - Token codec configured with key and algorithm
    /// * `access_token_ttl` - Lifetime of every issued token
    pub fn new(jwt_handler: JwtHandler, access_token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler,
            access_token_ttl,
        }
    }

    /// Build an authenticator from raw settings.
    ///
    /// # Arguments
    /// * `secret` - Secret key for JWT signing
    /// * `algorithm` - HMAC algorithm name
    /// * `access_token_expire_minutes` - Token lifetime in minutes
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm name is not an HMAC algorithm
    pub fn from_settings(
        secret: &[u8],
        algorithm: &str,
        access_token_expire_minutes: i64,
    ) -> Result<Self, JwtError> {
        let jwt_handler = JwtHandler::with_algorithm(secret, algorithm)?;
        Ok(Self::new(
            jwt_handler,
            Duration::minutes(access_token_expire_minutes),
        ))
    }

    /// Replace the default password hasher.
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Principal identifier to bind into the token
    /// * `issued_at` - Start of the token validity window
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, issued_at)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: BEARER_TOKEN_TYPE,
        })
    }

    /// Issue a token without password verification.
    pub fn issue_token(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        self.jwt_handler
            .encode(subject, issued_at, self.access_token_ttl)
    }

    /// Validate a token against the current time and return its subject.
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Validate a token as of `now` and return its subject.
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.jwt_handler.decode_at(token, now)
    }
}
