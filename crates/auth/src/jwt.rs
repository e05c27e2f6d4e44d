//! HS256 token decoding and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("token decode failed")]
    Decode,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Validate a bearer token into claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError>;
}

/// HMAC-SHA256 validator over a shared secret.
///
/// Time-window checks go through [`validate_claims`] against the caller's
/// clock, not jsonwebtoken's own `exp` handling, so the claims model stays
/// transport-agnostic.
pub struct Hs256JwtValidator {
    key: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            key: DecodingKey::from_secret(&secret),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &validation)
            .map_err(|_| JwtError::Decode)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    use imprint_core::{TenantId, UserId};

    use super::*;
    use crate::roles::Role;

    fn mint(secret: &str, expires_at: DateTime<Utc>) -> String {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: UserId::new(),
            tenant_id: TenantId::new(),
            roles: vec![Role::Admin],
            issued_at: now - Duration::minutes(1),
            expires_at,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_round_trips() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let token = mint("secret", Utc::now() + Duration::minutes(10));
        let claims = validator.validate(&token, Utc::now()).unwrap();
        assert_eq!(claims.roles, vec![Role::Admin]);
    }

    #[test]
    fn wrong_secret_fails_decode() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let token = mint("other-secret", Utc::now() + Duration::minutes(10));
        assert!(matches!(
            validator.validate(&token, Utc::now()),
            Err(JwtError::Decode)
        ));
    }

    #[test]
    fn expired_token_fails_claims_validation() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let token = mint("secret", Utc::now() - Duration::seconds(5));
        assert!(matches!(
            validator.validate(&token, Utc::now()),
            Err(JwtError::Claims(TokenValidationError::Expired))
        ));
    }
}
