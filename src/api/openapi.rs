//! OpenAPI document assembled from the handler annotations.
//!
//! Register new endpoints in `paths(...)` so they show up in the document
//! served under `/docs`.

use utoipa::OpenApi;

use super::error::ErrorMessage;
use super::handlers::{health, history, root, user_login};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        user_login::login,
        history::create,
        history::list,
        history::delete_many,
    ),
    components(schemas(
        ErrorMessage,
        health::Health,
        user_login::UserLogin,
        user_login::Token,
        history::types::HistoryRecord,
        history::types::NewHistory,
        history::types::DeleteHistory,
        history::types::Deleted,
    )),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "history", description = "Per-user IP lookup history"),
        (name = "health", description = "Service liveness"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_contains_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/"));
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/auth/login"));
        assert!(paths.contains_key("/history"));
    }
}
