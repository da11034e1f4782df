//! Authenticated principal extraction.
//!
//! Flow Overview: read the `Authorization` header, verify it as a bearer
//! token, and return a principal that downstream handlers scope their
//! queries by. The guard keeps no state between requests.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::debug;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::token::TokenKeys;

/// Authenticated user context derived from the bearer token.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: Uuid,
}

/// Resolve the `Authorization` header into a principal, or fail the request
/// with a 401 error.
///
/// A missing header short-circuits before any verification work. A present
/// header is verified against the current signing secret; malformed tokens
/// and signature mismatches are both deliberately collapsed into the same
/// 401 response.
///
/// # Errors
/// [`ApiError::MissingToken`] when no credential is supplied,
/// [`ApiError::InvalidToken`] when verification fails.
pub fn require_auth(headers: &HeaderMap, keys: &TokenKeys) -> Result<Principal, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError::MissingToken)?;

    let user_id = keys.verify(token).map_err(|err| {
        debug!("Token verification failed: {err}");

        ApiError::InvalidToken
    })?;

    Ok(Principal { user_id })
}
