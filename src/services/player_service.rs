//! Player resolution: decides what the player view should actually load for
//! a requested song id, falling back gracefully when the song cannot play.

use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::models::notice::Notice;
use crate::models::song::SongWithRelations;
use crate::services::song_service::SongService;

#[derive(Debug)]
pub enum PlayerResolution {
    Play {
        song: SongWithRelations,
        /// Playable song ids in queue order; the frontend uses this for
        /// previous/next navigation.
        queue_ids: Vec<String>,
        notice: Option<Notice>,
    },
    Library {
        notice: Option<Notice>,
    },
}

pub struct PlayerService;

impl PlayerService {
    pub async fn resolve(db: &Surreal<Any>, song_id: Option<&str>) -> Result<PlayerResolution> {
        // Without an id there is nothing to play; the library is the home view.
        let Some(song_id) = song_id else {
            return Ok(PlayerResolution::Library { notice: None });
        };

        let queue_ids = SongService::playable_song_ids(db).await?;

        let song = match SongService::get_song(db, song_id).await {
            Ok(song) => song,
            Err(Error::SongNotFound { .. }) => {
                return Ok(PlayerResolution::Library {
                    notice: Some(Notice::error("Song not found")),
                });
            }
            Err(err) => return Err(err),
        };

        if !song.active {
            return Ok(PlayerResolution::Library {
                notice: Some(Notice::error("Song not found")),
            });
        }

        if song.file_url.as_deref().is_none_or(str::is_empty) {
            tracing::debug!(song = %song.title, "requested song has no audio file");
            let Some(first_playable) = queue_ids.first() else {
                return Ok(PlayerResolution::Library {
                    notice: Some(Notice::error("No songs with audio available")),
                });
            };
            let fallback = SongService::get_song(db, first_playable).await?;
            return Ok(PlayerResolution::Play {
                song: fallback,
                queue_ids,
                notice: Some(Notice::warning("This song has no audio file")),
            });
        }

        Ok(PlayerResolution::Play {
            song,
            queue_ids,
            notice: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notice::NoticeLevel;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db
    }

    async fn add_song(db: &Surreal<Any>, id: &str, title: &str, active: bool, with_file: bool) {
        let file_url = with_file.then(|| format!("/media/{id}.mp3"));
        db.query(
            "CREATE type::thing('song', $id) SET title = $title, duration_secs = 100, \
             cover_url = NONE, file_url = $file_url, plays = 0, active = $active, \
             created_at = time::now();",
        )
        .bind(("id", id.to_string()))
        .bind(("title", title.to_string()))
        .bind(("file_url", file_url))
        .bind(("active", active))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_no_id_goes_to_library() {
        let db = setup_db().await;
        let resolution = PlayerService::resolve(&db, None).await.unwrap();
        let PlayerResolution::Library { notice } = resolution else {
            panic!("expected library");
        };
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_plays_requested_song_with_queue() {
        let db = setup_db().await;
        add_song(&db, "1", "A", true, true).await;
        add_song(&db, "2", "B", true, true).await;

        let resolution = PlayerService::resolve(&db, Some("2")).await.unwrap();
        let PlayerResolution::Play { song, queue_ids, notice } = resolution else {
            panic!("expected play");
        };
        assert_eq!(song.title, "B");
        assert_eq!(queue_ids, vec!["1".to_string(), "2".to_string()]);
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_unknown_or_inactive_song_goes_to_library() {
        let db = setup_db().await;
        add_song(&db, "1", "A", false, true).await;

        for id in ["missing", "1"] {
            let resolution = PlayerService::resolve(&db, Some(id)).await.unwrap();
            let PlayerResolution::Library { notice } = resolution else {
                panic!("expected library for {id}");
            };
            assert_eq!(notice.unwrap().level, NoticeLevel::Error);
        }
    }

    #[tokio::test]
    async fn test_fileless_song_falls_back_to_first_playable() {
        let db = setup_db().await;
        add_song(&db, "1", "Has Audio", true, true).await;
        add_song(&db, "2", "Silent", true, false).await;

        let resolution = PlayerService::resolve(&db, Some("2")).await.unwrap();
        let PlayerResolution::Play { song, notice, .. } = resolution else {
            panic!("expected play");
        };
        assert_eq!(song.title, "Has Audio");
        assert_eq!(notice.unwrap().level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn test_fileless_song_without_any_playable_goes_to_library() {
        let db = setup_db().await;
        add_song(&db, "1", "Silent", true, false).await;

        let resolution = PlayerService::resolve(&db, Some("1")).await.unwrap();
        let PlayerResolution::Library { notice } = resolution else {
            panic!("expected library");
        };
        assert_eq!(notice.unwrap().level, NoticeLevel::Error);
    }
}
