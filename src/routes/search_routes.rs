use axum::{routing::get, Router};

use crate::{controllers::search_controller::SearchController, AppState};

pub struct SearchRoutes;

impl SearchRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/", get(SearchController::search))
            .route("/suggest", get(SearchController::suggest))
    }
}
