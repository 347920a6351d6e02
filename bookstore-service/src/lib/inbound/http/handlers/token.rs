use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiForm;
use super::ApiSuccess;
use crate::domain::authentication::models::AccessToken;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Exchange an email/password pair for a bearer token.
///
/// Follows the OAuth2 password flow: the email travels in the `username`
/// form field.
pub async fn issue_token(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<TokenRequestForm>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .auth_service
        .authenticate(&form.username, &form.password)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}

#[derive(Clone, Deserialize)]
pub struct TokenRequestForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type.to_string(),
        }
    }
}
