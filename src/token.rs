//! Bearer token issuance and verification.
//!
//! Tokens are compact HS256 JWS carrying only the subject (user id). No
//! expiry claim is issued and none is validated: a token stays valid until
//! the signing secret rotates, at which point every outstanding token stops
//! verifying.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token is not a structurally valid JWS
    #[error("malformed token")]
    Malformed,
    /// Signature does not verify against the current secret
    #[error("signature mismatch")]
    SignatureMismatch,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
}

/// Signing and verification keys derived once from the process-wide secret
/// and shared with handlers via an `Extension`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no expiry claim, so none is required nor validated
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret.expose_secret().as_bytes()),
            decoding: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }

    /// Issue a signed token encoding the subject identifier.
    ///
    /// # Errors
    /// Returns an error if claim serialization fails.
    pub fn issue(&self, subject: Uuid) -> anyhow::Result<String> {
        let claims = Claims { sub: subject };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return the subject it was issued for.
    ///
    /// Verification is deterministic and side-effect-free: the same bad
    /// input always produces the same error.
    ///
    /// # Errors
    /// [`TokenError::SignatureMismatch`] when the signature does not verify
    /// against the current secret, [`TokenError::Malformed`] for anything
    /// else.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(err) => match err.kind() {
                ErrorKind::InvalidSignature => Err(TokenError::SignatureMismatch),
                _ => Err(TokenError::Malformed),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(&SecretString::from("test-secret".to_string()))
    }

    // Flip the first character of one dot-separated segment. The first
    // character carries fully significant bits, so the segment still decodes
    // but to different bytes.
    fn tamper_segment(token: &str, index: usize) -> String {
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let mut chars: Vec<char> = parts[index].chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        parts[index] = chars.into_iter().collect();
        parts.join(".")
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let keys = keys();
        let subject = Uuid::new_v4();

        let token = keys.issue(subject).unwrap();

        assert_eq!(keys.verify(&token), Ok(subject));
    }

    #[test]
    fn test_token_has_no_expiry_claim() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4()).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;

        let data = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .unwrap();

        assert!(data.claims.get("sub").is_some());
        assert!(data.claims.get("exp").is_none());
    }

    #[test]
    fn test_verify_fails_with_rotated_secret() {
        let keys = keys();
        let other = TokenKeys::new(&SecretString::from("rotated-secret".to_string()));

        let token = keys.issue(Uuid::new_v4()).unwrap();

        assert_eq!(other.verify(&token), Err(TokenError::SignatureMismatch));
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let keys = keys();

        assert_eq!(keys.verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(keys.verify(""), Err(TokenError::Malformed));
        assert_eq!(keys.verify("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4()).unwrap();

        let tampered = tamper_segment(&token, 2);

        assert_eq!(keys.verify(&tampered), Err(TokenError::SignatureMismatch));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let keys = keys();
        let token = keys.issue(Uuid::new_v4()).unwrap();

        let tampered = tamper_segment(&token, 1);

        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_is_deterministic() {
        let keys = keys();
        let token = tamper_segment(&keys.issue(Uuid::new_v4()).unwrap(), 2);

        assert_eq!(keys.verify(&token), keys.verify(&token));
    }
}
