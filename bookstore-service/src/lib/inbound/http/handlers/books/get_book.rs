use axum::extract::State;
use axum::http::StatusCode;

use super::BookResponseData;
use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(book_id): ApiPath<String>,
) -> Result<ApiSuccess<BookResponseData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(BookError::from)?;

    state
        .book_service
        .get_book(&book_id)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
