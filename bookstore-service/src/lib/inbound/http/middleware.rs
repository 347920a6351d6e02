use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::seller::models::SellerId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extension type holding the seller a protected request acts as
#[derive(Debug, Clone)]
pub struct AuthenticatedSeller {
    pub seller_id: SellerId,
}

/// Admission check for protected routes.
///
/// Resolves the bearer token to a stored seller and adds it to the request
/// extensions. A missing or rejected token is a 401; a valid token whose
/// seller has since been deleted is a 404.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(IntoResponse::into_response)?;

    let seller = state
        .auth_service
        .resolve(token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(AuthenticatedSeller {
        seller_id: seller.id,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Not authenticated".to_string()))?;

    match auth_str.get(..BEARER_PREFIX.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER_PREFIX) => {
            Ok(auth_str[BEARER_PREFIX.len()..].trim())
        }
        _ => Err(ApiError::Unauthorized("Not authenticated".to_string())),
    }
}
