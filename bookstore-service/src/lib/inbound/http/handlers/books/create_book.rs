use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::default_count_pages;
use super::default_year;
use super::BookResponseData;
use super::ParseBookRequestError;
use crate::domain::book::models::Author;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::PageCount;
use crate::domain::book::models::PublicationYear;
use crate::domain::book::models::Title;
use crate::domain::book::ports::BookServicePort;
use crate::domain::seller::models::SellerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSeller;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSeller>,
    ApiJson(body): ApiJson<CreateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    state
        .book_service
        .create_book(&caller.seller_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}

/// HTTP request body for listing a new book.
///
/// Page count is accepted as either `count_pages` or `pages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    #[serde(default = "default_year")]
    year: i32,
    #[serde(alias = "pages", default = "default_count_pages")]
    count_pages: i32,
    seller_id: i64,
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseBookRequestError> {
        Ok(CreateBookCommand {
            title: Title::new(self.title)?,
            author: Author::new(self.author)?,
            year: PublicationYear::new(self.year)?,
            count_pages: PageCount::new(self.count_pages)?,
            seller_id: SellerId(self.seller_id),
        })
    }
}
