use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::record_helpers::{album_exists, artist_exists, count_table, song_exists};
use crate::helpers::thing_helpers::{
    create_album_thing, create_artist_thing, create_song_thing, create_user_thing,
};
use crate::models::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
use crate::models::song::{CreateSongRequest, Song, SongWithRelations, UpdateSongRequest};

/// Projection shared by every query that returns songs with their relations.
const SONG_RELATIONS: &str = "(SELECT * FROM <-artist_performs_song<-artist ORDER BY name ASC) AS artists, \
     (SELECT * FROM <-album_contains_song<-album)[0] AS album";

pub struct SongService;

impl SongService {
    pub async fn get_song(db: &Surreal<Any>, song_id: &str) -> Result<SongWithRelations> {
        let song_thing = create_song_thing(song_id);

        let sql = format!("SELECT *, {SONG_RELATIONS} FROM $song_thing;");
        let mut response = db.query(sql).bind(("song_thing", song_thing)).await?;
        let song: Option<SongWithRelations> = response.take(0)?;

        song.ok_or(Error::SongNotFound {
            id: song_id.to_string(),
        })
    }

    /// Admin listing, newest first, deterministic across pages.
    pub async fn list_songs(
        db: &Surreal<Any>,
        pagination: &PaginationQuery,
    ) -> Result<PaginatedResponse<SongWithRelations>> {
        let sql = format!(
            "SELECT *, {SONG_RELATIONS} FROM song \
             ORDER BY created_at DESC, id ASC LIMIT $limit START $offset;"
        );
        let mut response = db
            .query(sql)
            .bind(("limit", pagination.page_size()))
            .bind(("offset", pagination.offset()))
            .await?;
        let songs: Vec<SongWithRelations> = response.take(0)?;

        let total = count_table(db, "song").await?;
        Ok(PaginatedResponse {
            data: songs,
            pagination: PaginationInfo::new(pagination.page(), pagination.page_size(), total),
        })
    }

    /// Ids of every playable song in queue order.
    pub async fn playable_song_ids(db: &Surreal<Any>) -> Result<Vec<String>> {
        #[derive(serde::Deserialize)]
        struct IdRow {
            id: surrealdb::sql::Thing,
        }

        let sql = "SELECT id FROM song \
                   WHERE active = true AND file_url != NONE AND file_url != '' \
                   ORDER BY id ASC;";
        let mut response = db.query(sql).await?;
        let rows: Vec<IdRow> = response.take(0)?;
        Ok(rows.into_iter().map(|row| row.id.id.to_raw()).collect())
    }

    pub async fn create_song(
        db: &Surreal<Any>,
        request: CreateSongRequest,
    ) -> Result<SongWithRelations> {
        if request.title.trim().is_empty() {
            return Err(Error::InvalidInput {
                reason: "Song title cannot be empty".to_string(),
            });
        }

        for artist_id in &request.artist_ids {
            if !artist_exists(db, artist_id).await? {
                return Err(Error::ArtistNotFound {
                    id: artist_id.clone(),
                });
            }
        }
        if let Some(album_id) = &request.album_id {
            if !album_exists(db, album_id).await? {
                return Err(Error::AlbumNotFound {
                    id: album_id.clone(),
                });
            }
        }

        let song = Song {
            id: None,
            title: request.title.trim().to_string(),
            duration_secs: request.duration_secs,
            cover_url: request.cover_url,
            file_url: request.file_url,
            plays: 0,
            active: request.active,
            created_at: chrono::Utc::now().into(),
        };

        let created: Song = db
            .create("song")
            .content(song)
            .await?
            .ok_or(Error::DbError("Could not create song".to_string()))?;
        let created_id = created
            .id
            .as_ref()
            .map(|thing| thing.id.to_raw())
            .ok_or(Error::DbError("created song has no id".to_string()))?;

        Self::relate_artists(db, &created_id, &request.artist_ids).await?;
        if let Some(album_id) = &request.album_id {
            Self::relate_album(db, &created_id, album_id).await?;
        }

        Self::get_song(db, &created_id).await
    }

    pub async fn update_song(
        db: &Surreal<Any>,
        song_id: &str,
        request: UpdateSongRequest,
    ) -> Result<SongWithRelations> {
        let song_thing = create_song_thing(song_id);

        let mut response = db
            .query("SELECT * FROM $song_thing;")
            .bind(("song_thing", song_thing.clone()))
            .await?;
        let existing: Option<Song> = response.take(0)?;
        let mut song = existing.ok_or(Error::SongNotFound {
            id: song_id.to_string(),
        })?;

        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(Error::InvalidInput {
                    reason: "Song title cannot be empty".to_string(),
                });
            }
            song.title = title.trim().to_string();
        }
        if let Some(duration_secs) = request.duration_secs {
            song.duration_secs = duration_secs;
        }
        if let Some(cover_url) = request.cover_url {
            song.cover_url = cover_url;
        }
        if let Some(file_url) = request.file_url {
            song.file_url = file_url;
        }
        if let Some(active) = request.active {
            song.active = active;
        }

        // Content must not carry the id field.
        song.id = None;
        let _updated: Option<Song> = db
            .update(("song", song_thing.id.to_raw()))
            .content(song)
            .await?;

        if let Some(artist_ids) = &request.artist_ids {
            for artist_id in artist_ids {
                if !artist_exists(db, artist_id).await? {
                    return Err(Error::ArtistNotFound {
                        id: artist_id.clone(),
                    });
                }
            }
            db.query("DELETE artist_performs_song WHERE out = $song_thing;")
                .bind(("song_thing", song_thing.clone()))
                .await?;
            Self::relate_artists(db, song_id, artist_ids).await?;
        }
        if let Some(album_change) = &request.album_id {
            if let Some(album_id) = album_change {
                if !album_exists(db, album_id).await? {
                    return Err(Error::AlbumNotFound {
                        id: album_id.clone(),
                    });
                }
            }
            db.query("DELETE album_contains_song WHERE out = $song_thing;")
                .bind(("song_thing", song_thing))
                .await?;
            if let Some(album_id) = album_change {
                Self::relate_album(db, song_id, album_id).await?;
            }
        }

        Self::get_song(db, song_id).await
    }

    /// Deletes the song together with its edges and play history.
    pub async fn delete_song(db: &Surreal<Any>, song_id: &str) -> Result<()> {
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }
        let song_thing = create_song_thing(song_id);

        db.query(
            "DELETE artist_performs_song WHERE out = $song_thing; \
             DELETE album_contains_song WHERE out = $song_thing; \
             DELETE playlist_contains_song WHERE out = $song_thing; \
             DELETE user_likes_song WHERE out = $song_thing; \
             DELETE listen WHERE song = $song_thing; \
             DELETE $song_thing;",
        )
        .bind(("song_thing", song_thing))
        .await?;

        Ok(())
    }

    /// Records a play: bumps the counter and appends a history row.
    pub async fn record_listen(
        db: &Surreal<Any>,
        song_id: &str,
        user_id: Option<&str>,
    ) -> Result<()> {
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }

        let song_thing = create_song_thing(song_id);
        let user_thing = user_id.map(create_user_thing);

        db.query(
            "UPDATE $song_thing SET plays += 1; \
             CREATE listen SET song = $song_thing, user = $user_thing, listened_at = time::now();",
        )
        .bind(("song_thing", song_thing))
        .bind(("user_thing", user_thing))
        .await?;

        Ok(())
    }

    async fn relate_artists(db: &Surreal<Any>, song_id: &str, artist_ids: &[String]) -> Result<()> {
        let song_thing = create_song_thing(song_id);
        for artist_id in artist_ids {
            db.query("RELATE $artist_thing->artist_performs_song->$song_thing;")
                .bind(("artist_thing", create_artist_thing(artist_id)))
                .bind(("song_thing", song_thing.clone()))
                .await?;
        }
        Ok(())
    }

    async fn relate_album(db: &Surreal<Any>, song_id: &str, album_id: &str) -> Result<()> {
        db.query("RELATE $album_thing->album_contains_song->$song_thing;")
            .bind(("album_thing", create_album_thing(album_id)))
            .bind(("song_thing", create_song_thing(song_id)))
            .await?;
        Ok(())
    }
}
