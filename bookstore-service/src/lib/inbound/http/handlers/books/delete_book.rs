use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::BookId;
use crate::domain::book::ports::BookServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::middleware::AuthenticatedSeller;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSeller>,
    ApiPath(book_id): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(BookError::from)?;

    state
        .book_service
        .delete_book(&caller.seller_id, &book_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
