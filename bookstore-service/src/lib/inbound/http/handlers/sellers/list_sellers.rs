use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::SellerResponseData;
use crate::domain::seller::ports::SellerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_sellers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListSellersResponseData>, ApiError> {
    let sellers = state.seller_service.list_sellers().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListSellersResponseData {
            sellers: sellers.iter().map(SellerResponseData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSellersResponseData {
    pub sellers: Vec<SellerResponseData>,
}
