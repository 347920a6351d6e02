use thiserror::Error;

use super::models::BookId;
use crate::domain::seller::models::SellerId;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book id: {0}")]
    InvalidFormat(String),
}

/// Error for title/author validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTextError {
    #[error("{field} is empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Error for publication year validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublicationYearError {
    #[error("Year is wrong: {actual} is earlier than {min}")]
    TooEarly { min: i32, actual: i32 },
}

/// Error for page count validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageCountError {
    #[error("Page count must be positive, got {0}")]
    NotPositive(i32),
}

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book id: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid text field: {0}")]
    InvalidText(#[from] BookTextError),

    #[error("Invalid year: {0}")]
    InvalidYear(#[from] PublicationYearError),

    #[error("Invalid page count: {0}")]
    InvalidPageCount(#[from] PageCountError),

    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Seller not found: {0}")]
    SellerNotFound(SellerId),

    #[error("Seller {actor} may not modify books of seller {owner}")]
    Forbidden { actor: SellerId, owner: SellerId },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
