use axum::{
    routing::{get, post},
    Router,
};

use crate::{controllers::song_controller::SongController, AppState};

pub struct SongRoutes;

impl SongRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/{id}", get(SongController::get_song))
            .route("/{id}/listen", post(SongController::listen))
    }
}
