use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::Result;
use crate::models::artist::{
    Artist, ArtistWithRelations, CreateArtistRequest, UpdateArtistRequest,
};
use crate::models::pagination::{PaginatedResponse, PaginationQuery};
use crate::services::artist_service::ArtistService;
use crate::AppState;

pub struct ArtistController;

impl ArtistController {
    pub async fn get_artist(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ArtistWithRelations>> {
        let artist = ArtistService::get_artist(&state.db, &id).await?;
        Ok(Json(artist))
    }

    // -- Management handlers, admin-gated by the router.

    pub async fn list_artists(
        State(state): State<AppState>,
        Query(pagination): Query<PaginationQuery>,
    ) -> Result<Json<PaginatedResponse<Artist>>> {
        let artists = ArtistService::list_artists(&state.db, &pagination).await?;
        Ok(Json(artists))
    }

    pub async fn create_artist(
        State(state): State<AppState>,
        Json(request): Json<CreateArtistRequest>,
    ) -> Result<(StatusCode, Json<Artist>)> {
        let artist = ArtistService::create_artist(&state.db, request).await?;
        Ok((StatusCode::CREATED, Json(artist)))
    }

    pub async fn update_artist(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Json(request): Json<UpdateArtistRequest>,
    ) -> Result<Json<Artist>> {
        let artist = ArtistService::update_artist(&state.db, &id, request).await?;
        Ok(Json(artist))
    }

    pub async fn delete_artist(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<StatusCode> {
        ArtistService::delete_artist(&state.db, &id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
