use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::helpers::record_helpers::count_table;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_songs: u64,
    pub total_artists: u64,
    pub total_albums: u64,
}

pub struct AdminController;

impl AdminController {
    pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardStats>> {
        Ok(Json(DashboardStats {
            total_songs: count_table(&state.db, "song").await?,
            total_artists: count_table(&state.db, "artist").await?,
            total_albums: count_table(&state.db, "album").await?,
        }))
    }
}
