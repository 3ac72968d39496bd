use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::Result;
use crate::middlewares::mw_auth::Ctx;
use crate::models::pagination::{PaginatedResponse, PaginationQuery};
use crate::models::song::{CreateSongRequest, SongWithRelations, UpdateSongRequest};
use crate::services::song_service::SongService;
use crate::AppState;

pub struct SongController;

impl SongController {
    pub async fn get_song(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<SongWithRelations>> {
        let song = SongService::get_song(&state.db, &id).await?;
        Ok(Json(song))
    }

    /// Anonymous plays count too; the user is only attached when the request
    /// went through the auth middleware.
    pub async fn listen(
        State(state): State<AppState>,
        ctx: Option<Extension<Ctx>>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        let user_id = ctx.as_ref().map(|ext| ext.user_id.as_str());
        SongService::record_listen(&state.db, &id, user_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    // -- Management handlers, admin-gated by the router.

    pub async fn list_songs(
        State(state): State<AppState>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<PaginatedResponse<SongWithRelations>>> {
        let songs = SongService::list_songs(&state.db, &pagination).await?;
        Ok(Json(songs))
    }

    pub async fn create_song(
        State(state): State<AppState>,
        Json(request): Json<CreateSongRequest>,
    ) -> Result<(StatusCode, Json<SongWithRelations>)> {
        let song = SongService::create_song(&state.db, request).await?;
        Ok((StatusCode::CREATED, Json(song)))
    }

    pub async fn update_song(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(request): Json<UpdateSongRequest>,
    ) -> Result<Json<SongWithRelations>> {
        let song = SongService::update_song(&state.db, &id, request).await?;
        Ok(Json(song))
    }

    pub async fn delete_song(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        SongService::delete_song(&state.db, &id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
