use axum::{
    routing::{get, put},
    Router,
};

use crate::{controllers::favorite_controller::FavoriteController, AppState};

pub struct FavoriteRoutes;

impl FavoriteRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", get(FavoriteController::list_favorites)).route(
            "/{song_id}",
            put(FavoriteController::add_favorite).delete(FavoriteController::remove_favorite),
        )
    }
}
