use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::seller::errors::SellerError;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::ports::SellerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::middleware::AuthenticatedSeller;
use crate::inbound::http::router::AppState;

/// Delete the caller's own seller record together with its books.
pub async fn delete_seller(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSeller>,
    ApiPath(seller_id): ApiPath<String>,
) -> Result<StatusCode, ApiError> {
    let seller_id = SellerId::from_string(&seller_id).map_err(SellerError::from)?;

    state
        .seller_service
        .delete_seller(&caller.seller_id, &seller_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
