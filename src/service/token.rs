//! Token Issuance Service
//!
//! Signs bearer tokens over a subject id and role with a fixed two-hour
//! expiry. Verification lives in the auth middleware; the core login flow
//! only signs.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::AccessClaims;
use crate::utils::error::{ApiError, ApiResult};

/// JWT signing and validation over a shared HS256 secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service from the signing secret
    ///
    /// An absent secret is a misconfiguration, not a per-request failure:
    /// construction fails and startup aborts.
    pub fn new(secret: &str) -> ApiResult<Self> {
        if secret.is_empty() {
            return Err(ApiError::Configuration(
                "JWT signing secret is not set".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        })
    }

    /// Sign a token asserting the subject's identity and role until expiry
    pub fn issue(&self, subject_id: i64, role: &str) -> ApiResult<String> {
        let claims = AccessClaims::new(subject_id, role, Utc::now());
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key).map_err(ApiError::from)
    }

    /// Decode and validate a bearer token, returning its claims
    pub fn validate(&self, token: &str) -> ApiResult<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(ApiError::from)
    }
}
