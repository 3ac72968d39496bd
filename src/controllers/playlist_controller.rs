use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::Result;
use crate::middlewares::mw_auth::Ctx;
use crate::models::playlist::{CreatePlaylistRequest, Playlist, PlaylistWithSongs};
use crate::services::playlist_service::PlaylistService;
use crate::AppState;

pub struct PlaylistController;

impl PlaylistController {
    pub async fn create_playlist(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Json(request): Json<CreatePlaylistRequest>,
    ) -> Result<(StatusCode, Json<Playlist>)> {
        let playlist = PlaylistService::create_playlist(&state.db, &ctx.user_id, request).await?;
        Ok((StatusCode::CREATED, Json(playlist)))
    }

    pub async fn my_playlists(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
    ) -> Result<Json<Vec<Playlist>>> {
        let playlists = PlaylistService::my_playlists(&state.db, &ctx.user_id).await?;
        Ok(Json(playlists))
    }

    pub async fn get_playlist(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(id): Path<String>,
    ) -> Result<Json<PlaylistWithSongs>> {
        let playlist = PlaylistService::get_playlist(&state.db, &ctx.user_id, &id).await?;
        Ok(Json(playlist))
    }

    pub async fn delete_playlist(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        PlaylistService::delete_playlist(&state.db, &ctx.user_id, &id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn add_song(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path((id, song_id)): Path<(String, String)>,
    ) -> Result<StatusCode> {
        PlaylistService::add_song(&state.db, &ctx.user_id, &id, &song_id).await?;
        Ok(StatusCode::CREATED)
    }

    pub async fn remove_song(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path((id, song_id)): Path<(String, String)>,
    ) -> Result<StatusCode> {
        PlaylistService::remove_song(&state.db, &ctx.user_id, &id, &song_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
