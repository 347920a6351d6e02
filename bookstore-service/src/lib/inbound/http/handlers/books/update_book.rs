use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::default_count_pages;
use super::default_year;
use super::BookResponseData;
use super::ParseBookRequestError;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::Author;
use crate::domain::book::models::BookId;
use crate::domain::book::models::PageCount;
use crate::domain::book::models::PublicationYear;
use crate::domain::book::models::Title;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSeller;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSeller>,
    ApiPath(book_id): ApiPath<String>,
    ApiJson(body): ApiJson<UpdateBookRequest>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(BookError::from)?;

    state
        .book_service
        .update_book(&caller.seller_id, &book_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateBookRequest {
    title: String,
    author: String,
    #[serde(default = "default_year")]
    year: i32,
    #[serde(alias = "pages", default = "default_count_pages")]
    count_pages: i32,
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, ParseBookRequestError> {
        Ok(UpdateBookCommand {
            title: Title::new(self.title)?,
            author: Author::new(self.author)?,
            year: PublicationYear::new(self.year)?,
            count_pages: PageCount::new(self.count_pages)?,
        })
    }
}
