use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::models::song::SongWithRelations;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Playlist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub name: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub created_by: Thing,
    pub created_at: Datetime,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaylistWithSongs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub created_by: Thing,
    pub created_at: Datetime,
    pub songs: Vec<SongWithRelations>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}
