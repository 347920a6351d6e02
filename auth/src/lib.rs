//! Authentication utilities library
//!
//! Provides the credential and token primitives the bookstore service builds on:
//! - Password hashing (Argon2id)
//! - Signed, time-bound access tokens (JWT, HMAC family)
//! - Authentication coordination for an already-fetched credential
//!
//! Persistence lookups are not part of this crate. The service defines its own
//! ports and adapts these implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::{Duration, Utc};
//!
//! let handler = JwtHandler::with_algorithm(b"secret_key_at_least_32_bytes_long!", "HS256").unwrap();
//! let token = handler.encode("42", Utc::now(), Duration::minutes(30)).unwrap();
//! assert_eq!(handler.decode(&token).unwrap(), "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Utc;
//!
//! let auth = Authenticator::from_settings(b"secret_key_at_least_32_bytes_long!", "HS256", 30).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "42", Utc::now()).unwrap();
//! assert_eq!(result.token_type, "bearer");
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "42");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::BEARER_TOKEN_TYPE;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
