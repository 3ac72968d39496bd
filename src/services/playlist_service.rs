use serde::Deserialize;
use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::record_helpers::song_exists;
use crate::helpers::thing_helpers::{create_playlist_thing, create_song_thing, create_user_thing};
use crate::models::playlist::{CreatePlaylistRequest, Playlist, PlaylistWithSongs};

pub struct PlaylistService;

impl PlaylistService {
    async fn validate_ownership(
        db: &Surreal<Any>,
        playlist_id: &str,
        user_id: &str,
    ) -> Result<Playlist> {
        let mut response = db
            .query("SELECT * FROM playlist WHERE id = $playlist_thing AND created_by = $user_thing;")
            .bind(("playlist_thing", create_playlist_thing(playlist_id)))
            .bind(("user_thing", create_user_thing(user_id)))
            .await?;
        let mut playlists: Vec<Playlist> = response.take(0)?;

        playlists.pop().ok_or(Error::PlaylistNotFound {
            id: playlist_id.to_string(),
        })
    }

    async fn song_in_playlist(
        db: &Surreal<Any>,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<bool> {
        #[derive(Deserialize)]
        struct CountRow {
            count: u32,
        }

        let mut response = db
            .query(
                "SELECT count() FROM playlist_contains_song \
                 WHERE in = $playlist_thing AND out = $song_thing GROUP ALL;",
            )
            .bind(("playlist_thing", create_playlist_thing(playlist_id)))
            .bind(("song_thing", create_song_thing(song_id)))
            .await?;
        let row: Option<CountRow> = response.take(0)?;
        Ok(row.map(|row| row.count).unwrap_or(0) > 0)
    }

    pub async fn create_playlist(
        db: &Surreal<Any>,
        user_id: &str,
        request: CreatePlaylistRequest,
    ) -> Result<Playlist> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput {
                reason: "Playlist name cannot be empty".to_string(),
            });
        }

        let playlist = Playlist {
            id: None,
            name,
            description: request.description,
            cover_url: request.cover_url,
            is_public: request.is_public,
            created_by: create_user_thing(user_id),
            created_at: chrono::Utc::now().into(),
        };

        db.create("playlist")
            .content(playlist)
            .await?
            .ok_or(Error::DbError("Could not create playlist".to_string()))
    }

    pub async fn my_playlists(db: &Surreal<Any>, user_id: &str) -> Result<Vec<Playlist>> {
        let mut response = db
            .query(
                "SELECT * FROM playlist WHERE created_by = $user_thing \
                 ORDER BY created_at DESC;",
            )
            .bind(("user_thing", create_user_thing(user_id)))
            .await?;
        let playlists: Vec<Playlist> = response.take(0)?;
        Ok(playlists)
    }

    /// Owner-only; public playlists of other users are readable via
    /// `get_playlist`, never writable.
    pub async fn delete_playlist(
        db: &Surreal<Any>,
        user_id: &str,
        playlist_id: &str,
    ) -> Result<()> {
        Self::validate_ownership(db, playlist_id, user_id).await?;

        db.query(
            "DELETE playlist_contains_song WHERE in = $playlist_thing; \
             DELETE $playlist_thing;",
        )
        .bind(("playlist_thing", create_playlist_thing(playlist_id)))
        .await?;

        Ok(())
    }

    pub async fn add_song(
        db: &Surreal<Any>,
        user_id: &str,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<()> {
        Self::validate_ownership(db, playlist_id, user_id).await?;
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }
        if Self::song_in_playlist(db, playlist_id, song_id).await? {
            return Err(Error::InvalidInput {
                reason: "Song is already in the playlist".to_string(),
            });
        }

        db.query(
            "RELATE $playlist_thing->playlist_contains_song->$song_thing \
             SET added_at = time::now();",
        )
        .bind(("playlist_thing", create_playlist_thing(playlist_id)))
        .bind(("song_thing", create_song_thing(song_id)))
        .await?;

        Ok(())
    }

    pub async fn remove_song(
        db: &Surreal<Any>,
        user_id: &str,
        playlist_id: &str,
        song_id: &str,
    ) -> Result<()> {
        Self::validate_ownership(db, playlist_id, user_id).await?;

        db.query(
            "DELETE playlist_contains_song \
             WHERE in = $playlist_thing AND out = $song_thing;",
        )
        .bind(("playlist_thing", create_playlist_thing(playlist_id)))
        .bind(("song_thing", create_song_thing(song_id)))
        .await?;

        Ok(())
    }

    /// Readable by the owner, or by anyone when the playlist is public.
    pub async fn get_playlist(
        db: &Surreal<Any>,
        user_id: &str,
        playlist_id: &str,
    ) -> Result<PlaylistWithSongs> {
        let sql = "SELECT *, \
            (SELECT *, \
                (SELECT * FROM <-artist_performs_song<-artist ORDER BY name ASC) AS artists, \
                (SELECT * FROM <-album_contains_song<-album)[0] AS album \
             FROM ->playlist_contains_song->song) AS songs \
            FROM $playlist_thing;";

        let mut response = db
            .query(sql)
            .bind(("playlist_thing", create_playlist_thing(playlist_id)))
            .await?;
        let playlist: Option<PlaylistWithSongs> = response.take(0)?;
        let playlist = playlist.ok_or(Error::PlaylistNotFound {
            id: playlist_id.to_string(),
        })?;

        if !playlist.is_public && playlist.created_by != create_user_thing(user_id) {
            return Err(Error::PlaylistNotFound {
                id: playlist_id.to_string(),
            });
        }

        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db.query(
            "CREATE user:listener SET username = 'listener', password = 'hash', groups = ['User'], \
                 is_superuser = false, created_at = time::now(); \
             CREATE user:other SET username = 'other', password = 'hash', groups = ['User'], \
                 is_superuser = false, created_at = time::now(); \
             CREATE song:letitbe SET title = 'Let It Be', duration_secs = 243, cover_url = NONE, \
                 file_url = '/media/1.mp3', plays = 0, active = true, created_at = time::now();",
        )
        .await
        .unwrap();
        db
    }

    fn request(name: &str, is_public: bool) -> CreatePlaylistRequest {
        CreatePlaylistRequest {
            name: name.to_string(),
            description: None,
            cover_url: None,
            is_public,
        }
    }

    #[tokio::test]
    async fn test_create_add_and_fetch_playlist() {
        let db = setup_db().await;
        let playlist = PlaylistService::create_playlist(&db, "listener", request("Workout", true))
            .await
            .unwrap();
        let id = playlist.id.unwrap().id.to_raw();

        PlaylistService::add_song(&db, "listener", &id, "letitbe").await.unwrap();

        let fetched = PlaylistService::get_playlist(&db, "listener", &id).await.unwrap();
        assert_eq!(fetched.name, "Workout");
        assert_eq!(fetched.songs.len(), 1);
        assert_eq!(fetched.songs[0].title, "Let It Be");

        let err = PlaylistService::add_song(&db, "listener", &id, "letitbe").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_ownership_is_enforced() {
        let db = setup_db().await;
        let playlist = PlaylistService::create_playlist(&db, "listener", request("Private", false))
            .await
            .unwrap();
        let id = playlist.id.unwrap().id.to_raw();

        // Another user can neither mutate nor read a private playlist.
        assert!(matches!(
            PlaylistService::add_song(&db, "other", &id, "letitbe").await.unwrap_err(),
            Error::PlaylistNotFound { .. }
        ));
        assert!(matches!(
            PlaylistService::get_playlist(&db, "other", &id).await.unwrap_err(),
            Error::PlaylistNotFound { .. }
        ));

        // Public playlists are readable by anyone.
        let public = PlaylistService::create_playlist(&db, "listener", request("Shared", true))
            .await
            .unwrap();
        let public_id = public.id.unwrap().id.to_raw();
        assert!(PlaylistService::get_playlist(&db, "other", &public_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_playlist_removes_edges() {
        let db = setup_db().await;
        let playlist = PlaylistService::create_playlist(&db, "listener", request("Workout", true))
            .await
            .unwrap();
        let id = playlist.id.unwrap().id.to_raw();
        PlaylistService::add_song(&db, "listener", &id, "letitbe").await.unwrap();

        PlaylistService::delete_playlist(&db, "listener", &id).await.unwrap();
        assert!(PlaylistService::my_playlists(&db, "listener").await.unwrap().is_empty());
    }
}
