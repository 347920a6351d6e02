use axum::extract::State;
use axum::http::StatusCode;

use super::SellerWithBooksResponseData;
use crate::domain::seller::errors::SellerError;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::ports::SellerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_seller(
    State(state): State<AppState>,
    ApiPath(seller_id): ApiPath<String>,
) -> Result<ApiSuccess<SellerWithBooksResponseData>, ApiError> {
    let seller_id = SellerId::from_string(&seller_id).map_err(SellerError::from)?;

    state
        .seller_service
        .get_seller(&seller_id)
        .await
        .map_err(ApiError::from)
        .map(|ref seller| ApiSuccess::new(StatusCode::OK, seller.into()))
}
