use axum::{routing::get, Router};

use crate::{controllers::library_controller::LibraryController, AppState};

pub struct GenreRoutes;

impl GenreRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", get(LibraryController::genres))
    }
}
