//! Credential store lookups.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Stored credential row: the user id and the bcrypt hash of the password.
#[derive(Debug)]
pub(crate) struct Credential {
    pub id: Uuid,
    pub password: String,
}

/// Fetch the stored credential for an email, `None` when no user matches.
/// The caller must not reveal which of email or password was wrong.
pub(crate) async fn user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Credential>, sqlx::Error> {
    let row = sqlx::query("SELECT id, password FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Credential {
        id: row.get("id"),
        password: row.get("password"),
    }))
}
