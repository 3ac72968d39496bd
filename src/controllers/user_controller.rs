use axum::extract::State;
use axum::{Extension, Json};

use crate::error::Result;
use crate::middlewares::mw_auth::Ctx;
use crate::models::settings::{UpdateSettingsRequest, UserSettings};
use crate::models::user::UserProfile;
use crate::services::settings_service::SettingsService;
use crate::AppState;

pub struct UserController;

impl UserController {
    pub async fn profile(Extension(ctx): Extension<Ctx>) -> Json<UserProfile> {
        Json(ctx.user.into())
    }

    pub async fn get_settings(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
    ) -> Result<Json<UserSettings>> {
        let settings = SettingsService::get_or_create(&state.db, &ctx.user_id).await?;
        Ok(Json(settings))
    }

    pub async fn update_settings(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Json(request): Json<UpdateSettingsRequest>,
    ) -> Result<Json<UserSettings>> {
        let settings = SettingsService::update(&state.db, &ctx.user_id, request).await?;
        Ok(Json(settings))
    }
}
