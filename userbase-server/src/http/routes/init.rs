//! Schema bootstrap endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::InitStatus;

pub const INIT_INFO: &str = "Table ensured and sample user added.";

/// Init response
#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub status: &'static str,
    pub info: &'static str,
}

impl From<InitStatus> for InitResponse {
    fn from(_: InitStatus) -> Self {
        Self {
            status: "ok",
            info: INIT_INFO,
        }
    }
}

/// GET /init - ensure the users table and insert the seed row
async fn init(State(state): State<Arc<AppState>>) -> Result<Json<InitResponse>, ApiError> {
    let status = state.store.initialize().await?;
    Ok(Json(InitResponse::from(status)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/init", get(init))
}
