use axum::{
    routing::get,
    Router,
};

use crate::{
    controllers::{auth_controller::AuthController, user_controller::UserController},
    AppState,
};

pub struct UserRoutes;

impl UserRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/me", get(UserController::profile))
            .route(
                "/settings",
                get(UserController::get_settings).put(UserController::update_settings),
            )
            .route("/redirect", get(AuthController::role_redirect))
    }
}
