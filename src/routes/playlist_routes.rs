use axum::{
    routing::{get, put},
    Router,
};

use crate::{controllers::playlist_controller::PlaylistController, AppState};

pub struct PlaylistRoutes;

impl PlaylistRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route(
                "/",
                get(PlaylistController::my_playlists).post(PlaylistController::create_playlist),
            )
            .route(
                "/{id}",
                get(PlaylistController::get_playlist).delete(PlaylistController::delete_playlist),
            )
            .route(
                "/{id}/songs/{song_id}",
                put(PlaylistController::add_song).delete(PlaylistController::remove_song),
            )
    }
}
