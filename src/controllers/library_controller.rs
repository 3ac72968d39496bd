use axum::extract::{Query, State};
use axum::Json;

use crate::error::Result;
use crate::models::album::AlbumWithArtists;
use crate::models::artist::ArtistWithCounts;
use crate::models::genre::Genre;
use crate::models::pagination::LoadMoreQuery;
use crate::services::library_service::{LibraryOverview, LibraryService, LoadMorePage};
use crate::AppState;

const DEFAULT_ARTISTS_PAGE: u32 = 12;
const DEFAULT_ALBUMS_PAGE: u32 = 8;

pub struct LibraryController;

impl LibraryController {
    pub async fn overview(State(state): State<AppState>) -> Result<Json<LibraryOverview>> {
        let overview = LibraryService::overview(&state.db).await?;
        Ok(Json(overview))
    }

    pub async fn more_artists(
        State(state): State<AppState>,
        Query(params): Query<LoadMoreQuery>,
    ) -> Result<Json<LoadMorePage<ArtistWithCounts>>> {
        let offset = params.offset.unwrap_or(0);
        let limit = params.limit.unwrap_or(DEFAULT_ARTISTS_PAGE).clamp(1, 100);
        let page = LibraryService::more_artists(&state.db, offset, limit).await?;
        Ok(Json(page))
    }

    pub async fn more_albums(
        State(state): State<AppState>,
        Query(params): Query<LoadMoreQuery>,
    ) -> Result<Json<LoadMorePage<AlbumWithArtists>>> {
        let offset = params.offset.unwrap_or(0);
        let limit = params.limit.unwrap_or(DEFAULT_ALBUMS_PAGE).clamp(1, 100);
        let page = LibraryService::more_albums(&state.db, offset, limit).await?;
        Ok(Json(page))
    }

    pub async fn genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>> {
        let genres = LibraryService::genres(&state.db).await?;
        Ok(Json(genres))
    }
}
