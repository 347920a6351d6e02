use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use http::header;
use http::HeaderValue;
use serde::Serialize;

use crate::domain::authentication::errors::AuthError;
use crate::domain::book::errors::BookError;
use crate::domain::seller::errors::SellerError;

pub mod books;
pub mod health;
pub mod sellers;
pub mod token;

/// Successful response carrying the resource itself as the JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// `Json` body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Form` body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct ApiForm<T>(pub T);

/// `Path` extractor whose rejections use the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    UnsupportedMediaType(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::new_error(status, message))).into_response();

        // Bearer challenge on every 401.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

fn internal(err: impl std::fmt::Display) -> ApiError {
    tracing::error!(error = %err, "Request failed");
    ApiError::InternalServerError("Internal server error".to_string())
}

fn rejection(status: StatusCode, message: String) -> ApiError {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity(message),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ApiError::UnsupportedMediaType(message),
        StatusCode::INTERNAL_SERVER_ERROR => internal(message),
        _ => ApiError::BadRequest(message),
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection_err: JsonRejection) -> Self {
        rejection(rejection_err.status(), rejection_err.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection_err: FormRejection) -> Self {
        rejection(rejection_err.status(), rejection_err.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection_err: PathRejection) -> Self {
        rejection(rejection_err.status(), rejection_err.body_text())
    }
}

impl From<SellerError> for ApiError {
    fn from(err: SellerError) -> Self {
        match err {
            SellerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SellerError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            SellerError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            SellerError::InvalidSellerId(_)
            | SellerError::InvalidName(_)
            | SellerError::InvalidEmail(_)
            | SellerError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            SellerError::PasswordHashing(_) | SellerError::DatabaseError(_) => internal(err),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) | BookError::SellerNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            BookError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            BookError::InvalidBookId(_)
            | BookError::InvalidText(_)
            | BookError::InvalidYear(_)
            | BookError::InvalidPageCount(_) => ApiError::UnprocessableEntity(err.to_string()),
            BookError::DatabaseError(_) => internal(err),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed | AuthError::InvalidToken => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthError::PrincipalNotFound(_) => ApiError::NotFound(err.to_string()),
            AuthError::CorruptCredential(_)
            | AuthError::CredentialCheckAborted(_)
            | AuthError::TokenIssuance(_)
            | AuthError::DatabaseError(_) => internal(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::models::BookId;
    use crate::domain::seller::models::SellerId;

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::from(AuthError::InvalidToken).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_other_errors_have_no_challenge() {
        let response = ApiError::from(BookError::NotFound(BookId(3))).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_authentication_failures_share_one_message() {
        assert_eq!(
            ApiError::from(AuthError::AuthenticationFailed),
            ApiError::Unauthorized("Incorrect email or password".to_string())
        );
    }

    #[test]
    fn test_rejection_status_mapping() {
        assert_eq!(
            rejection(StatusCode::UNPROCESSABLE_ENTITY, "missing field".to_string()),
            ApiError::UnprocessableEntity("missing field".to_string())
        );
        assert_eq!(
            rejection(StatusCode::BAD_REQUEST, "syntax error".to_string()),
            ApiError::BadRequest("syntax error".to_string())
        );
        assert_eq!(
            rejection(StatusCode::UNSUPPORTED_MEDIA_TYPE, "content type".to_string()),
            ApiError::UnsupportedMediaType("content type".to_string())
        );
    }

    #[test]
    fn test_invalid_ids_are_validation_failures() {
        let err = SellerId::from_string("abc").unwrap_err();
        assert!(matches!(
            ApiError::from(SellerError::from(err)),
            ApiError::UnprocessableEntity(_)
        ));

        let err = BookId::from_string("0").unwrap_err();
        assert!(matches!(
            ApiError::from(BookError::from(err)),
            ApiError::UnprocessableEntity(_)
        ));
    }

    #[test]
    fn test_domain_error_status_mapping() {
        assert!(matches!(
            ApiError::from(SellerError::Forbidden {
                actor: SellerId(1),
                target: SellerId(2)
            }),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from(SellerError::EmailAlreadyExists("a@x.com".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::PrincipalNotFound(SellerId(9))),
            ApiError::NotFound(_)
        ));
        assert_eq!(
            ApiError::from(BookError::DatabaseError("connection reset".to_string())),
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }
}
