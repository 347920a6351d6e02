use serde::Serialize;
use thiserror::Error;

use crate::domain::book::errors::BookTextError;
use crate::domain::book::errors::PageCountError;
use crate::domain::book::errors::PublicationYearError;
use crate::domain::book::models::Book;
use crate::domain::book::models::PageCount;
use crate::domain::book::models::PublicationYear;
use crate::inbound::http::handlers::ApiError;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

pub use create_book::create_book;
pub use delete_book::delete_book;
pub use get_book::get_book;
pub use list_books::list_books;
pub use update_book::update_book;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookResponseData {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
    pub seller_id: i64,
}

impl From<&Book> for BookResponseData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            year: book.year.value(),
            count_pages: book.count_pages.value(),
            seller_id: book.seller_id.0,
        }
    }
}

#[derive(Debug, Clone, Error)]
enum ParseBookRequestError {
    #[error("Invalid text field: {0}")]
    Text(#[from] BookTextError),

    #[error("Invalid year: {0}")]
    Year(#[from] PublicationYearError),

    #[error("Invalid page count: {0}")]
    PageCount(#[from] PageCountError),
}

impl From<ParseBookRequestError> for ApiError {
    fn from(err: ParseBookRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

fn default_year() -> i32 {
    PublicationYear::DEFAULT
}

fn default_count_pages() -> i32 {
    PageCount::DEFAULT
}
