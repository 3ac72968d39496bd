use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::notice::{library_target, Notice};
use crate::models::song::SongWithRelations;
use crate::services::player_service::{PlayerResolution, PlayerService};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayerParams {
    pub id: Option<String>,
    /// `song_id` accepted as an alias of `id`.
    pub song_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub song: SongWithRelations,
    pub queue_ids: Vec<String>,
    pub notice: Option<Notice>,
}

pub struct PlayerController;

impl PlayerController {
    pub async fn player(
        State(state): State<AppState>,
        Query(params): Query<PlayerParams>,
    ) -> Result<Response> {
        let song_id = params.song_id.as_deref().or(params.id.as_deref());

        let response = match PlayerService::resolve(&state.db, song_id).await? {
            PlayerResolution::Play {
                song,
                queue_ids,
                notice,
            } => Json(PlayerView {
                song,
                queue_ids,
                notice,
            })
            .into_response(),
            PlayerResolution::Library { notice } => {
                Redirect::to(&library_target(notice.as_ref())).into_response()
            }
        };

        Ok(response)
    }
}
