use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::Result;
use crate::middlewares::mw_auth::Ctx;
use crate::models::favorite::FavoriteSong;
use crate::services::favorite_service::FavoriteService;
use crate::AppState;

pub struct FavoriteController;

impl FavoriteController {
    pub async fn list_favorites(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
    ) -> Result<Json<Vec<FavoriteSong>>> {
        let favorites = FavoriteService::list_favorites(&state.db, &ctx.user_id).await?;
        Ok(Json(favorites))
    }

    pub async fn add_favorite(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(song_id): Path<String>,
    ) -> Result<StatusCode> {
        FavoriteService::add_favorite(&state.db, &ctx.user_id, &song_id).await?;
        Ok(StatusCode::CREATED)
    }

    pub async fn remove_favorite(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(song_id): Path<String>,
    ) -> Result<StatusCode> {
        FavoriteService::remove_favorite(&state.db, &ctx.user_id, &song_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
