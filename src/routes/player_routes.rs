use axum::{routing::get, Router};

use crate::{controllers::player_controller::PlayerController, AppState};

pub struct PlayerRoutes;

impl PlayerRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", get(PlayerController::player))
    }
}
