use thiserror::Error;

use super::models::SellerId;

/// Error for SellerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SellerIdError {
    #[error("Invalid seller id: {0}")]
    InvalidFormat(String),
}

/// Error for first/last name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonNameError {
    #[error("Name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for plaintext password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters")]
    TooShort { min: usize },
}

/// Top-level error for all seller-related operations
#[derive(Debug, Clone, Error)]
pub enum SellerError {
    #[error("Invalid seller id: {0}")]
    InvalidSellerId(#[from] SellerIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] PersonNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    #[error("Seller not found: {0}")]
    NotFound(SellerId),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Seller {actor} may not modify seller {target}")]
    Forbidden { actor: SellerId, target: SellerId },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
