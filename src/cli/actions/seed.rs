use crate::api::handlers::valid_email;
use crate::cli::actions::Action;
use anyhow::{anyhow, Context, Result};
use bcrypt::DEFAULT_COST;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

const SCHEMA_SQL: &str = include_str!("../../../sql/schema.sql");

/// Handle the seed action: apply the schema and upsert the user
pub async fn handle(action: Action) -> Result<()> {
    let Action::Seed {
        dsn,
        email,
        password,
    } = action
    else {
        return Err(anyhow!("unexpected action"));
    };

    if !valid_email(&email) {
        return Err(anyhow!("invalid email: {email}"));
    }

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    // Schema statements are IF NOT EXISTS, re-applying is a no-op
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(&pool)
        .await
        .context("Failed to apply schema")?;

    let hashed =
        bcrypt::hash(password.expose_secret(), DEFAULT_COST).context("Failed to hash password")?;

    sqlx::query(
        "INSERT INTO users (email, password) VALUES ($1, $2) \
         ON CONFLICT (email) DO UPDATE SET password = EXCLUDED.password",
    )
    .bind(&email)
    .bind(&hashed)
    .execute(&pool)
    .await
    .context("Failed to seed user")?;

    info!("User seeded: {email}");

    Ok(())
}
