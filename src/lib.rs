//! # Spuro (IP geolocation lookup history API)
//!
//! `spuro` stores per-user IP geolocation lookup history behind a small
//! authenticated HTTP API.
//!
//! ## Authentication
//!
//! Users log in with email and password (`POST /auth/login`) and receive a
//! signed bearer token carrying their user id. The token is transmitted back
//! as the raw value of the `Authorization` header (no `Bearer ` prefix) and
//! is verified on every protected request. Tokens carry no expiry claim and
//! remain valid until the signing secret rotates.
//!
//! ## Ownership scoping
//!
//! Every history operation is scoped to the authenticated user: records are
//! created with the caller as owner, listings only return the caller's rows,
//! and bulk deletes silently skip ids owned by anyone else. A caller cannot
//! reach another user's records by enumerating identifiers.

pub mod api;
pub mod cli;
pub mod token;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
