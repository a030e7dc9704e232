//! User listing endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::User;

/// GET /users - every user as `{id, name}`, order unspecified
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users", get(list_users))
}
