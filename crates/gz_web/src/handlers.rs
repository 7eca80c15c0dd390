use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// 0-based page, as used by the pager.
    #[serde(default)]
    pub page: u32,
}

pub async fn list_notices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    let listing = state.notices.list_notices(params.page).await;
    let status = if listing.is_available() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(listing.to_json())).into_response()
}

pub async fn health() -> &'static str {
    "ok"
}
