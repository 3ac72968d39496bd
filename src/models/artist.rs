use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::models::{album::AlbumWithArtists, song::Song};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Artist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Datetime,
}

/// Artist row for the library grid, annotated with how many songs it performs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArtistWithCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Datetime,
    #[serde(default)]
    pub songs_count: u32,
    #[serde(default)]
    pub albums_count: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArtistWithRelations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Datetime,
    pub songs: Vec<Song>,
    pub albums: Vec<AlbumWithArtists>,
}

#[derive(Debug, Deserialize)]
pub struct CreateArtistRequest {
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update; omitted fields are left untouched. The clearable fields
/// take an explicit `null` to erase the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateArtistRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub image_url: Option<Option<String>>,
}
