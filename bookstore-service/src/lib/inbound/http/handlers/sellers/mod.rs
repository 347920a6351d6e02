use serde::Serialize;

use crate::domain::book::models::Book;
use crate::domain::seller::models::Seller;
use crate::domain::seller::models::SellerWithBooks;

pub mod create_seller;
pub mod delete_seller;
pub mod get_seller;
pub mod list_sellers;
pub mod update_seller;

pub use create_seller::create_seller;
pub use delete_seller::delete_seller;
pub use get_seller::get_seller;
pub use list_sellers::list_sellers;
pub use update_seller::update_seller;

/// Public view of a seller. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerResponseData {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Seller> for SellerResponseData {
    fn from(seller: &Seller) -> Self {
        Self {
            id: seller.id.0,
            first_name: seller.first_name.as_str().to_string(),
            last_name: seller.last_name.as_str().to_string(),
            email: seller.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerWithBooksResponseData {
    #[serde(flatten)]
    pub seller: SellerResponseData,
    pub books: Vec<SellerBookData>,
}

/// Book as listed under its seller, without the redundant `seller_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerBookData {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub count_pages: i32,
}

impl From<&Book> for SellerBookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            year: book.year.value(),
            count_pages: book.count_pages.value(),
        }
    }
}

impl From<&SellerWithBooks> for SellerWithBooksResponseData {
    fn from(value: &SellerWithBooks) -> Self {
        Self {
            seller: (&value.seller).into(),
            books: value.books.iter().map(SellerBookData::from).collect(),
        }
    }
}
