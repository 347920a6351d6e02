use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use super::errors::AuthError;
use super::models::AccessToken;
use super::ports::AuthServicePort;
use super::ports::CredentialRepository;
use crate::domain::seller::models::Seller;
use crate::domain::seller::models::SellerId;

/// Sign-in and bearer-token admission for sellers.
///
/// The token subject is always the seller id in decimal form; email can be
/// changed after a token is issued, the id cannot.
pub struct AuthService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> AuthService<CR>
where
    CR: CredentialRepository,
{
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> AuthServicePort for AuthService<CR>
where
    CR: CredentialRepository,
{
    async fn authenticate(&self, email: &str, password: &str) -> Result<AccessToken, AuthError> {
        let Some(credential) = self.repository.find_credential_by_email(email).await? else {
            tracing::warn!("Authentication rejected");
            return Err(AuthError::AuthenticationFailed);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let password_hash = credential.password_hash.clone();
        let subject = credential.seller_id.to_string();

        // Argon2 verification is CPU-bound; keep it off the async workers.
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, &subject, Utc::now())
        })
        .await
        .map_err(|e| AuthError::CredentialCheckAborted(e.to_string()))?;

        match outcome {
            Ok(result) => {
                tracing::info!(seller_id = %credential.seller_id, "Access token issued");
                Ok(AccessToken {
                    access_token: result.access_token,
                    token_type: result.token_type,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!("Authentication rejected");
                Err(AuthError::AuthenticationFailed)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(
                    seller_id = %credential.seller_id,
                    error = %e,
                    "Stored password hash is unusable"
                );
                Err(AuthError::CorruptCredential(e.to_string()))
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::TokenIssuance(e.to_string())),
        }
    }

    async fn resolve(&self, token: &str) -> Result<Seller, AuthError> {
        let subject = self.authenticator.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            AuthError::InvalidToken
        })?;

        let seller_id = SellerId::from_string(&subject).map_err(|e| {
            tracing::warn!(error = %e, "Bearer token carries an unusable subject");
            AuthError::InvalidToken
        })?;

        self.repository
            .find_principal_by_id(&seller_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(seller_id = %seller_id, "Token subject no longer exists");
                AuthError::PrincipalNotFound(seller_id)
            })
    }
}
