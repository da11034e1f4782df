//! API handlers and shared utilities.
//!
//! Route handlers live here, one module per surface: login, ownership-scoped
//! history operations, and the liveness endpoints.

pub mod auth;
pub mod health;
pub mod history;
pub mod root;
pub mod user_login;

use regex::Regex;

/// Lightweight email sanity check used before touching the credential store.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}
