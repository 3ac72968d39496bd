use axum::{
    routing::get,
    Router,
};

use crate::{
    controllers::{
        admin_controller::AdminController, album_controller::AlbumController,
        artist_controller::ArtistController, song_controller::SongController,
    },
    AppState,
};

pub struct AdminRoutes;

impl AdminRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/dashboard", get(AdminController::dashboard))
            .route(
                "/artists",
                get(ArtistController::list_artists).post(ArtistController::create_artist),
            )
            .route(
                "/artists/{id}",
                get(ArtistController::get_artist)
                    .put(ArtistController::update_artist)
                    .delete(ArtistController::delete_artist),
            )
            .route(
                "/albums",
                get(AlbumController::list_albums).post(AlbumController::create_album),
            )
            .route(
                "/albums/{id}",
                get(AlbumController::get_album)
                    .put(AlbumController::update_album)
                    .delete(AlbumController::delete_album),
            )
            .route(
                "/songs",
                get(SongController::list_songs).post(SongController::create_song),
            )
            .route(
                "/songs/{id}",
                get(SongController::get_song)
                    .put(SongController::update_song)
                    .delete(SongController::delete_song),
            )
    }
}
