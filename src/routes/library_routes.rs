use axum::{routing::get, Router};

use crate::{controllers::library_controller::LibraryController, AppState};

pub struct LibraryRoutes;

impl LibraryRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/", get(LibraryController::overview))
            .route("/more/artists", get(LibraryController::more_artists))
            .route("/more/albums", get(LibraryController::more_albums))
    }
}
