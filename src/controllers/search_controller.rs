use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::Deserialize;

use crate::error::Result;
use crate::models::notice::{library_target, player_target};
use crate::services::search_service::{SearchOutcome, SearchService, SuggestionResults};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub current_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub q: Option<String>,
}

pub struct SearchController;

impl SearchController {
    /// Resolves a search to a redirect; every query ends up on the player or
    /// back in the library, never on an error page.
    pub async fn search(
        State(state): State<AppState>,
        Query(params): Query<SearchParams>,
    ) -> Result<Redirect> {
        let query = params.q.as_deref().unwrap_or("");
        let outcome =
            SearchService::resolve(&state.db, query, params.current_id.as_deref()).await?;

        let target = match &outcome {
            SearchOutcome::Player { song_id, notice } => player_target(song_id, notice.as_ref()),
            SearchOutcome::Library { notice } => library_target(notice.as_ref()),
        };

        Ok(Redirect::to(&target))
    }

    pub async fn suggest(
        State(state): State<AppState>,
        Query(params): Query<SuggestParams>,
    ) -> Result<Json<SuggestionResults>> {
        let query = params.q.as_deref().unwrap_or("");
        let results = SearchService::suggestions(&state.db, query).await?;
        Ok(Json(results))
    }
}
