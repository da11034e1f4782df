//! History service handlers.
//!
//! Every operation resolves the caller's identity first and scopes its
//! store access to that identity; the handlers are unreachable without a
//! verified token.

pub(crate) mod storage;
pub mod types;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    Json,
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::api::error::{ApiError, ErrorMessage};
use crate::api::handlers::auth::require_auth;
use crate::token::TokenKeys;
use types::{DeleteHistory, Deleted, HistoryRecord, NewHistory};

#[utoipa::path(
    post,
    path= "/history",
    request_body = NewHistory,
    responses (
        (status = 201, description = "Lookup saved", body = HistoryRecord, content_type = "application/json"),
        (status = 400, description = "Missing ip address", body = ErrorMessage),
        (status = 401, description = "Missing or invalid token", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage),
    ),
    tag= "history"
)]
// axum handler for saving a lookup
#[instrument(skip(pool, keys, headers, payload))]
pub async fn create(
    pool: Extension<PgPool>,
    keys: Extension<Arc<TokenKeys>>,
    headers: HeaderMap,
    payload: Option<Json<NewHistory>>,
) -> Result<(StatusCode, Json<HistoryRecord>), ApiError> {
    let principal = require_auth(&headers, &keys)?;

    let new: NewHistory = match payload {
        Some(Json(payload)) => payload,
        None => return Err(ApiError::Validation("Missing payload".to_string())),
    };

    if new.ip.is_empty() {
        return Err(ApiError::Validation("ip address is required".to_string()));
    }

    let record = storage::insert_record(&pool, principal.user_id, &new).await?;

    debug!("Saved lookup {} for user {}", record.id, principal.user_id);

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path= "/history",
    responses (
        (status = 200, description = "The caller's lookups, most recent first", body = [HistoryRecord], content_type = "application/json"),
        (status = 401, description = "Missing or invalid token", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage),
    ),
    tag= "history"
)]
// axum handler for listing lookups
#[instrument(skip(pool, keys, headers))]
pub async fn list(
    pool: Extension<PgPool>,
    keys: Extension<Arc<TokenKeys>>,
    headers: HeaderMap,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    let principal = require_auth(&headers, &keys)?;

    let records = storage::list_records(&pool, principal.user_id).await?;

    Ok(Json(records))
}

#[utoipa::path(
    delete,
    path= "/history",
    request_body = DeleteHistory,
    responses (
        (status = 200, description = "Listed ids owned by the caller were deleted", body = Deleted, content_type = "application/json"),
        (status = 400, description = "ids missing or not a collection", body = ErrorMessage),
        (status = 401, description = "Missing or invalid token", body = ErrorMessage),
        (status = 500, description = "Store failure", body = ErrorMessage),
    ),
    tag= "history"
)]
// axum handler for bulk deletion
#[instrument(skip(pool, keys, headers, payload))]
pub async fn delete_many(
    pool: Extension<PgPool>,
    keys: Extension<Arc<TokenKeys>>,
    headers: HeaderMap,
    payload: Option<Json<DeleteHistory>>,
) -> Result<Json<Deleted>, ApiError> {
    let principal = require_auth(&headers, &keys)?;

    let delete: DeleteHistory = match payload {
        Some(Json(payload)) => payload,
        None => {
            return Err(ApiError::Validation(
                "ids must be a list of record ids".to_string(),
            ))
        }
    };

    let deleted = storage::delete_records(&pool, principal.user_id, &delete.ids).await?;

    debug!("Deleted {deleted} lookups for user {}", principal.user_id);

    Ok(Json(Deleted {
        message: "History deleted".to_string(),
        deleted,
    }))
}
