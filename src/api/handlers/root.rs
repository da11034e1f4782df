use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path= "/",
    responses (
        (status = 200, description = "API is running", body = String)
    ),
    tag= "health"
)]
// Liveness text kept identical to the reference root route
pub async fn root() -> impl IntoResponse {
    "API is running"
}
