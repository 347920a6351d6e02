use std::fmt;

use crate::domain::seller::models::SellerId;

/// Stored credential for one principal, fetched by email at sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub seller_id: SellerId,
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("seller_id", &self.seller_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Access token handed to a client after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}
