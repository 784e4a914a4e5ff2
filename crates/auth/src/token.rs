//! HS256 token service over a shared secret.

use std::collections::HashSet;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use bookshelf_core::DomainError;

use crate::Claims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signing failed or the claims were unusable.
    #[error("Could not generate token")]
    Generation,

    /// Bad signature, malformed token, or empty claims.
    #[error("Invalid token: {0}")]
    Invalid(String),
}

impl From<TokenError> for DomainError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Generation => DomainError::persistence(err.to_string()),
            TokenError::Invalid(_) => DomainError::auth(err.to_string()),
        }
    }
}

/// Verification seam so the HTTP gate can hold a trait object instead of
/// the concrete key material.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// Key material derived once from the process-wide shared secret.
///
/// Constructed explicitly from configuration and passed where needed;
/// never ambient global state.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no `exp` claim; do not demand or check one.
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign the claims into a bearer token.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        if claims.is_empty() {
            return Err(TokenError::Generation);
        }

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|_| TokenError::Generation)
    }
}

impl TokenVerifier for TokenKeys {
    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if data.claims.is_empty() {
            return Err(TokenError::Invalid("empty claims".to_string()));
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"test-secret")
    }

    #[test]
    fn issue_verify_round_trip() {
        let keys = keys();
        let claims = Claims::new("alice");

        let token = keys.issue(&claims).unwrap();
        let verified = keys.verify(&token).unwrap();

        assert_eq!(verified, claims);
    }

    #[test]
    fn tampered_token_rejected() {
        let keys = keys();
        let token = keys.issue(&Claims::new("alice")).unwrap();

        // Flip the first character of the signature segment.
        let dot = token.rfind('.').unwrap();
        let mut bytes = token.into_bytes();
        bytes[dot + 1] = if bytes[dot + 1] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(matches!(
            keys.verify(&tampered),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = keys().issue(&Claims::new("alice")).unwrap();
        let other = TokenKeys::new(b"another-secret");

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn malformed_token_rejected() {
        assert!(matches!(
            keys().verify("not-a-jwt"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn empty_username_claims_refused_on_issue() {
        assert!(matches!(
            keys().issue(&Claims::new("  ")),
            Err(TokenError::Generation)
        ));
    }

    #[test]
    fn empty_username_claims_refused_on_verify() {
        // Sign an empty claims set directly, bypassing `issue`.
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &Claims::new(""),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(keys().verify(&token), Err(TokenError::Invalid(_))));
    }
}
