use crate::{
    api::{
        error::{ApiError, ErrorMessage},
        handlers::{auth::storage, valid_email},
    },
    token::TokenKeys,
};
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserLogin {
    email: String,
    password: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Token {
    pub token: String,
}

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = Token, content_type = "application/json"),
        (status = 400, description = "Invalid credentials", body = ErrorMessage),
    ),
    tag= "auth"
)]
// axum handler for login
#[instrument(skip(pool, keys, payload))]
pub async fn login(
    pool: Extension<PgPool>,
    keys: Extension<Arc<TokenKeys>>,
    payload: Option<Json<UserLogin>>,
) -> Result<Json<Token>, ApiError> {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return Err(ApiError::Validation("Missing payload".to_string())),
    };

    // An email that cannot exist gets the same answer as a wrong password
    if !valid_email(&user.email) {
        debug!("Email failed shape check");

        return Err(ApiError::InvalidCredentials);
    }

    let Some(credential) = storage::user_by_email(&pool, &user.email).await? else {
        debug!("User not found");

        return Err(ApiError::InvalidCredentials);
    };

    // One-way comparison against the stored bcrypt hash, never a plaintext
    // round trip
    let matches = bcrypt::verify(&user.password, &credential.password)
        .map_err(|err| ApiError::Internal(err.into()))?;

    if !matches {
        debug!("Password mismatch");

        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(credential.id)?;

    debug!("Login successful");

    Ok(Json(Token { token }))
}
