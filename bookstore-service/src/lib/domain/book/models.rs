use std::fmt;

use super::errors::BookIdError;
use super::errors::BookTextError;
use super::errors::PageCountError;
use super::errors::PublicationYearError;
use crate::domain::seller::models::SellerId;

/// Book entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: Title,
    pub author: Author,
    pub year: PublicationYear,
    pub count_pages: PageCount,
    pub seller_id: SellerId,
}

/// Book unique identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub i64);

impl BookId {
    /// Parse a book ID from its decimal form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(BookId(id)),
            _ => Err(BookIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_TEXT_LENGTH: usize = 255;

fn validated_text(field: &'static str, value: String) -> Result<String, BookTextError> {
    let length = value.chars().count();
    if value.trim().is_empty() {
        Err(BookTextError::Empty { field })
    } else if length > MAX_TEXT_LENGTH {
        Err(BookTextError::TooLong {
            field,
            max: MAX_TEXT_LENGTH,
            actual: length,
        })
    } else {
        Ok(value)
    }
}

/// Book title, non-empty and at most 255 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: String) -> Result<Self, BookTextError> {
        validated_text("title", title).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author name, non-empty and at most 255 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author(String);

impl Author {
    pub fn new(author: String) -> Result<Self, BookTextError> {
        validated_text("author", author).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Publication year, 1900 or later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationYear(i32);

impl PublicationYear {
    pub const MIN: i32 = 1900;
    pub const DEFAULT: i32 = 2024;

    pub fn new(year: i32) -> Result<Self, PublicationYearError> {
        if year < Self::MIN {
            return Err(PublicationYearError::TooEarly {
                min: Self::MIN,
                actual: year,
            });
        }
        Ok(Self(year))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Number of pages, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount(i32);

impl PageCount {
    pub const DEFAULT: i32 = 300;

    pub fn new(pages: i32) -> Result<Self, PageCountError> {
        if pages <= 0 {
            return Err(PageCountError::NotPositive(pages));
        }
        Ok(Self(pages))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Book fields ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: Title,
    pub author: Author,
    pub year: PublicationYear,
    pub count_pages: PageCount,
    pub seller_id: SellerId,
}

/// Command to list a new book for a seller
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: Title,
    pub author: Author,
    pub year: PublicationYear,
    pub count_pages: PageCount,
    pub seller_id: SellerId,
}

/// Command to replace a book's descriptive fields.
///
/// Ownership does not change through an update.
#[derive(Debug)]
pub struct UpdateBookCommand {
    pub title: Title,
    pub author: Author,
    pub year: PublicationYear,
    pub count_pages: PageCount,
}
