use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::Result;
use crate::models::album::{Album, AlbumWithArtists, CreateAlbumRequest, UpdateAlbumRequest};
use crate::models::pagination::{PaginatedResponse, PaginationQuery};
use crate::services::album_service::{AlbumDetail, AlbumService};
use crate::AppState;

pub struct AlbumController;

impl AlbumController {
    pub async fn get_album(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<AlbumDetail>> {
        let album = AlbumService::get_album(&state.db, &id).await?;
        Ok(Json(album))
    }

    // -- Management handlers, admin-gated by the router.

    pub async fn list_albums(
        State(state): State<AppState>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<PaginatedResponse<AlbumWithArtists>>> {
        let albums = AlbumService::list_albums(&state.db, &pagination).await?;
        Ok(Json(albums))
    }

    pub async fn create_album(
        State(state): State<AppState>,
        Json(request): Json<CreateAlbumRequest>,
    ) -> Result<(StatusCode, Json<Album>)> {
        let album = AlbumService::create_album(&state.db, request).await?;
        Ok((StatusCode::CREATED, Json(album)))
    }

    pub async fn update_album(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(request): Json<UpdateAlbumRequest>,
    ) -> Result<Json<Album>> {
        let album = AlbumService::update_album(&state.db, &id, request).await?;
        Ok(Json(album))
    }

    pub async fn delete_album(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        AlbumService::delete_album(&state.db, &id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
