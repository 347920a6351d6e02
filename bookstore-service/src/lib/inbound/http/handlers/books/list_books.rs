use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::BookResponseData;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListBooksResponseData>, ApiError> {
    let books = state.book_service.list_books().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListBooksResponseData {
            books: books.iter().map(BookResponseData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBooksResponseData {
    pub books: Vec<BookResponseData>,
}
