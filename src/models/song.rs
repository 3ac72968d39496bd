use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::models::{album::Album, artist::Artist};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Song {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub title: String,
    pub duration_secs: u32,
    pub cover_url: Option<String>,
    /// Songs without an audio file are never playable, whatever `active` says.
    pub file_url: Option<String>,
    #[serde(default)]
    pub plays: u32,
    pub active: bool,
    pub created_at: Datetime,
}

impl Song {
    pub fn is_playable(&self) -> bool {
        self.active && self.file_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    pub fn formatted_duration(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SongWithRelations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub title: String,
    pub duration_secs: u32,
    pub cover_url: Option<String>,
    pub file_url: Option<String>,
    #[serde(default)]
    pub plays: u32,
    pub active: bool,
    pub created_at: Datetime,
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
}

impl SongWithRelations {
    /// Comma-joined names of every associated artist, library-card style.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSongRequest {
    pub title: String,
    pub duration_secs: u32,
    pub cover_url: Option<String>,
    pub file_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub artist_ids: Vec<String>,
    pub album_id: Option<String>,
}

/// Partial update; omitted fields are left untouched. The clearable fields
/// take an explicit `null` to erase the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateSongRequest {
    pub title: Option<String>,
    pub duration_secs: Option<u32>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub cover_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub file_url: Option<Option<String>>,
    pub active: Option<bool>,
    pub artist_ids: Option<Vec<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub album_id: Option<Option<String>>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn song(active: bool, file_url: Option<&str>) -> Song {
        Song {
            id: None,
            title: "Let It Be".to_string(),
            duration_secs: 243,
            cover_url: None,
            file_url: file_url.map(String::from),
            plays: 0,
            active,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn test_playable_requires_active_and_file() {
        assert!(song(true, Some("/media/let-it-be.mp3")).is_playable());
        assert!(!song(false, Some("/media/let-it-be.mp3")).is_playable());
        assert!(!song(true, None).is_playable());
        assert!(!song(true, Some("")).is_playable());
    }

    #[test]
    fn test_formatted_duration() {
        assert_eq!(song(true, None).formatted_duration(), "4:03");
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let request: UpdateSongRequest = serde_json::from_str("{}").unwrap();
        assert!(request.file_url.is_none());
        assert!(request.album_id.is_none());

        let request: UpdateSongRequest =
            serde_json::from_str(r#"{"file_url": null, "cover_url": "/img/a.jpg"}"#).unwrap();
        assert_eq!(request.file_url, Some(None));
        assert_eq!(request.cover_url, Some(Some("/img/a.jpg".to_string())));
    }
}
