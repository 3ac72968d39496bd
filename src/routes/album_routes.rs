use axum::{routing::get, Router};

use crate::{controllers::album_controller::AlbumController, AppState};

pub struct AlbumRoutes;

impl AlbumRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/{id}", get(AlbumController::get_album))
    }
}
