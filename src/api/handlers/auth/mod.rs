//! Authentication guard for protected routes.
//!
//! The reference client transmits the raw bearer token as the
//! `Authorization` header value, without a `Bearer ` prefix; the guard reads
//! the header verbatim. Verification failures are mapped to `401` instead of
//! escaping the request pipeline.

pub(crate) mod principal;
pub(crate) mod storage;

pub use principal::{require_auth, Principal};
