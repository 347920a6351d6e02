use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding access tokens.
///
/// Signs with a shared secret using one of the HMAC algorithms. Expiry is
/// checked by the handler itself against an explicit instant with no leeway,
/// so `decode_at` is deterministic.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key and HS256.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create a JWT handler for an algorithm given by name.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `algorithm` - Algorithm name as it appears in the JWT header (`HS256`, `HS384`, `HS512`)
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown name, or a family that needs a key pair
    pub fn with_algorithm(secret: &[u8], algorithm: &str) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                algorithm,
                ..Self::new(secret)
            }),
            other => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Encode a signed token for `subject`, valid from `issued_at` for `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, issued_at, ttl);
        self.encode_claims(&claims)
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token against the current time and return its subject.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify under the configured key and algorithm
    /// * `Malformed` - Token or payload is not well-formed
    /// * `Expired` - Expiry is not in the future
    pub fn decode(&self, token: &str) -> Result<String, JwtError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode a token as of `now` and return its subject.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        self.decode_claims_at(token, now).map(|claims| claims.sub)
    }

    /// Verify a token as of `now` and return the full claims.
    pub fn decode_claims_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        JwtError::InvalidSignature
                    }
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        if token_data.claims.is_expired(now.timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(token_data.claims)
    }
}
