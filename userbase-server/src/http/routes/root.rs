//! Liveness message at `/`. Never touches the database.

use axum::{routing::get, Json, Router};
use serde::Serialize;

pub const ROOT_MESSAGE: &str = "userbase is up. Try /init and /users.";

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_message() {
        let Json(body) = root().await;
        assert_eq!(body.message, ROOT_MESSAGE);
    }
}
