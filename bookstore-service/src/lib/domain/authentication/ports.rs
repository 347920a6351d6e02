use async_trait::async_trait;

use super::errors::AuthError;
use super::models::AccessToken;
use super::models::Credential;
use crate::domain::seller::models::Seller;
use crate::domain::seller::models::SellerId;

/// Port for sign-in and caller resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify an email/password pair and issue an access token.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email or wrong password, indistinguishably
    /// * `CorruptCredential` - Stored hash cannot be parsed
    /// * `CredentialCheckAborted` - Password check task did not complete
    /// * `TokenIssuance` - Token could not be signed
    /// * `DatabaseError` - Credential lookup failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve the seller a bearer token was issued to.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is forged, malformed or expired
    /// * `PrincipalNotFound` - Token is valid but the seller no longer exists
    /// * `DatabaseError` - Principal lookup failed
    async fn resolve(&self, token: &str) -> Result<Seller, AuthError>;
}

/// Read-only lookups the auth flow needs from the seller store.
///
/// Both return `None` rather than failing when nothing matches.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    async fn find_credential_by_email(&self, email: &str)
        -> Result<Option<Credential>, AuthError>;

    async fn find_principal_by_id(&self, id: &SellerId) -> Result<Option<Seller>, AuthError>;
}
