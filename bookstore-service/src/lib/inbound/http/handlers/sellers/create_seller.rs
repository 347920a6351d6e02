use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::SellerResponseData;
use crate::domain::seller::errors::EmailError;
use crate::domain::seller::errors::PasswordPolicyError;
use crate::domain::seller::errors::PersonNameError;
use crate::domain::seller::models::CreateSellerCommand;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::PlainPassword;
use crate::domain::seller::ports::SellerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_seller(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateSellerRequest>,
) -> Result<ApiSuccess<SellerResponseData>, ApiError> {
    state
        .seller_service
        .create_seller(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref seller| ApiSuccess::new(StatusCode::CREATED, seller.into()))
}

/// HTTP request body for seller registration (raw JSON)
#[derive(Clone, Deserialize)]
pub struct CreateSellerRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateSellerRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] PersonNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl CreateSellerRequest {
    fn try_into_command(self) -> Result<CreateSellerCommand, ParseCreateSellerRequestError> {
        Ok(CreateSellerCommand {
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            email: EmailAddress::new(self.email)?,
            password: PlainPassword::new(self.password)?,
        })
    }
}

impl From<ParseCreateSellerRequestError> for ApiError {
    fn from(err: ParseCreateSellerRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
