use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use thiserror::Error;

use super::SellerResponseData;
use crate::domain::seller::errors::EmailError;
use crate::domain::seller::errors::PersonNameError;
use crate::domain::seller::errors::SellerError;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::models::UpdateSellerCommand;
use crate::domain::seller::ports::SellerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiPath;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSeller;
use crate::inbound::http::router::AppState;

pub async fn update_seller(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedSeller>,
    ApiPath(seller_id): ApiPath<String>,
    ApiJson(body): ApiJson<UpdateSellerRequest>,
) -> Result<ApiSuccess<SellerResponseData>, ApiError> {
    let seller_id = SellerId::from_string(&seller_id).map_err(SellerError::from)?;

    state
        .seller_service
        .update_seller(&caller.seller_id, &seller_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref seller| ApiSuccess::new(StatusCode::OK, seller.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateSellerRequest {
    first_name: String,
    last_name: String,
    email: String,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateSellerRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] PersonNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl UpdateSellerRequest {
    fn try_into_command(self) -> Result<UpdateSellerCommand, ParseUpdateSellerRequestError> {
        Ok(UpdateSellerCommand {
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            email: EmailAddress::new(self.email)?,
        })
    }
}

impl From<ParseUpdateSellerRequestError> for ApiError {
    fn from(err: ParseUpdateSellerRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
