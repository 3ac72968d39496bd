use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::models::{artist::Artist, song::Song};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Album {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub release_date: Option<Datetime>,
    pub active: bool,
    pub created_at: Datetime,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlbumWithArtists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub release_date: Option<Datetime>,
    pub active: bool,
    pub created_at: Datetime,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlbumWithRelations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub release_date: Option<Datetime>,
    pub active: bool,
    pub created_at: Datetime,
    pub artists: Vec<Artist>,
    pub songs: Vec<Song>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAlbumRequest {
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub release_date: Option<Datetime>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub artist_ids: Vec<String>,
}

/// Partial update; omitted fields are left untouched. The clearable fields
/// take an explicit `null` to erase the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateAlbumRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub cover_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub release_date: Option<Option<Datetime>>,
    pub active: Option<bool>,
    pub artist_ids: Option<Vec<String>>,
}

fn default_active() -> bool {
    true
}
