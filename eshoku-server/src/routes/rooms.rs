//! Room page endpoint

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
};
use eshoku_core::RoomPage;
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/room/{id}", get(show_room))
}

fn default_native_share() -> bool {
    true
}

/// Query parameters for the room page
#[derive(Deserialize)]
pub struct RoomQuery {
    /// Set to false when the client has no native share sheet.
    #[serde(default = "default_native_share")]
    pub native_share: bool,
}

/// GET /room/:id - Fetch a room and resolve it for the current viewer
async fn show_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Query(query): Query<RoomQuery>,
    headers: HeaderMap,
) -> Result<Json<RoomPage>, AppError> {
    let room = state.lookup().lookup(&room_id).await?;
    let viewer = state.viewer(&headers);

    let page = RoomPage::build(&room, viewer.as_ref(), state.site_url(), query.native_share);

    tracing::debug!(room_id = %room.id, action = ?page.action, "room page resolved");
    Ok(Json(page))
}
