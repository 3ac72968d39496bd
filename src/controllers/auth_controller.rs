use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Extension, Json};

use crate::auth::models::{LoginPayload, RegisterPayload, TokenResponse};
use crate::auth::policy;
use crate::error::Result;
use crate::middlewares::mw_auth::Ctx;
use crate::services::auth_service::AuthService;
use crate::AppState;

pub struct AuthController;

impl AuthController {
    /// Registration logs the new account straight in.
    pub async fn register(
        State(state): State<AppState>,
        Json(payload): Json<RegisterPayload>,
    ) -> Result<(StatusCode, Json<TokenResponse>)> {
        let user =
            AuthService::register_user(&state.db, payload.username, payload.password).await?;
        let token = AuthService::token_for(&user, &state.auth_config)?;

        Ok((StatusCode::CREATED, Json(TokenResponse { token })))
    }

    pub async fn login(
        State(state): State<AppState>,
        Json(payload): Json<LoginPayload>,
    ) -> Result<(StatusCode, Json<TokenResponse>)> {
        let token = AuthService::login_user(
            &state.db,
            &state.auth_config,
            payload.username,
            payload.password,
        )
        .await?;
        Ok((StatusCode::OK, Json(TokenResponse { token })))
    }

    /// Post-login landing: administrators go to the dashboard, everyone else
    /// to the library.
    pub async fn role_redirect(Extension(ctx): Extension<Ctx>) -> Redirect {
        if policy::is_administrator(&ctx.user) {
            Redirect::to("/api/admin/dashboard")
        } else {
            Redirect::to("/api/library")
        }
    }
}
