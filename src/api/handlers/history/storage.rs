//! Owner-scoped SQL helpers for history records.
//!
//! Every query here filters by the owning user id. There is no path that
//! reads or deletes another user's rows, even when their ids are supplied.

use sqlx::PgPool;
use uuid::Uuid;

use super::types::{HistoryRecord, NewHistory};

/// Inserts a record owned by `user_id` and returns the stored row with its
/// server-assigned id and creation timestamp.
pub(crate) async fn insert_record(
    pool: &PgPool,
    user_id: Uuid,
    new: &NewHistory,
) -> Result<HistoryRecord, sqlx::Error> {
    sqlx::query_as::<_, HistoryRecord>(
        r#"
        INSERT INTO history (user_id, ip, city, country, region, loc)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, ip, city, country, region, loc, created_at
        "#,
    )
    .bind(user_id)
    .bind(&new.ip)
    .bind(new.city.as_deref())
    .bind(new.country.as_deref())
    .bind(new.region.as_deref())
    .bind(new.loc.as_deref())
    .fetch_one(pool)
    .await
}

/// All records owned by `user_id`, most recent first.
pub(crate) async fn list_records(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<HistoryRecord>, sqlx::Error> {
    sqlx::query_as::<_, HistoryRecord>(
        r#"
        SELECT id, user_id, ip, city, country, region, loc, created_at
        FROM history
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Deletes the listed ids that belong to `user_id` and returns how many
/// rows went away. Ids owned by other users are silently left untouched,
/// and deleting an already-deleted id is a no-op.
pub(crate) async fn delete_records(
    pool: &PgPool,
    user_id: Uuid,
    ids: &[Uuid],
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM history WHERE user_id = $1 AND id = ANY($2)")
        .bind(user_id)
        .bind(ids)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
