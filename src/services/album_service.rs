use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::record_helpers::{album_exists, artist_exists, count_table};
use crate::helpers::thing_helpers::{create_album_thing, create_artist_thing};
use crate::models::album::{
    Album, AlbumWithArtists, AlbumWithRelations, CreateAlbumRequest, UpdateAlbumRequest,
};
use crate::models::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AlbumDetail {
    pub album: AlbumWithRelations,
    pub total_songs: usize,
    /// Sum of the track durations, rendered "m:ss" like the album header.
    pub total_duration: String,
}

pub struct AlbumService;

impl AlbumService {
    pub async fn get_album(db: &Surreal<Any>, album_id: &str) -> Result<AlbumDetail> {
        let album_thing = create_album_thing(album_id);

        let sql = "SELECT *, \
            (SELECT * FROM <-artist_creates_album<-artist ORDER BY name ASC) AS artists, \
            (SELECT * FROM ->album_contains_song->song ORDER BY created_at ASC) AS songs \
            FROM $album_thing;";

        let mut response = db.query(sql).bind(("album_thing", album_thing)).await?;
        let album: Option<AlbumWithRelations> = response.take(0)?;
        let album = album.ok_or(Error::AlbumNotFound {
            id: album_id.to_string(),
        })?;

        let total_secs: u32 = album.songs.iter().map(|song| song.duration_secs).sum();
        Ok(AlbumDetail {
            total_songs: album.songs.len(),
            total_duration: format!("{}:{:02}", total_secs / 60, total_secs % 60),
            album,
        })
    }

    pub async fn list_albums(
        db: &Surreal<Any>,
        pagination: &PaginationQuery,
    ) -> Result<PaginatedResponse<AlbumWithArtists>> {
        let mut response = db
            .query(
                "SELECT *, <-artist_creates_album<-artist.* AS artists FROM album \
                 ORDER BY release_date DESC LIMIT $limit START $offset;",
            )
            .bind(("limit", pagination.page_size()))
            .bind(("offset", pagination.offset()))
            .await?;
        let albums: Vec<AlbumWithArtists> = response.take(0)?;

        let total = count_table(db, "album").await?;
        Ok(PaginatedResponse {
            data: albums,
            pagination: PaginationInfo::new(pagination.page(), pagination.page_size(), total),
        })
    }

    pub async fn create_album(db: &Surreal<Any>, request: CreateAlbumRequest) -> Result<Album> {
        let title = request.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::InvalidInput {
                reason: "Album title cannot be empty".to_string(),
            });
        }
        for artist_id in &request.artist_ids {
            if !artist_exists(db, artist_id).await? {
                return Err(Error::ArtistNotFound {
                    id: artist_id.clone(),
                });
            }
        }

        let album = Album {
            id: None,
            title,
            description: request.description,
            cover_url: request.cover_url,
            release_date: request.release_date,
            active: request.active,
            created_at: chrono::Utc::now().into(),
        };

        let created: Album = db
            .create("album")
            .content(album)
            .await?
            .ok_or(Error::DbError("Could not create album".to_string()))?;

        if let Some(thing) = &created.id {
            let album_id = thing.id.to_raw();
            Self::relate_artists(db, &album_id, &request.artist_ids).await?;
        }

        Ok(created)
    }

    pub async fn update_album(
        db: &Surreal<Any>,
        album_id: &str,
        request: UpdateAlbumRequest,
    ) -> Result<Album> {
        let album_thing = create_album_thing(album_id);

        let mut response = db
            .query("SELECT * FROM $album_thing;")
            .bind(("album_thing", album_thing.clone()))
            .await?;
        let existing: Option<Album> = response.take(0)?;
        let mut album = existing.ok_or(Error::AlbumNotFound {
            id: album_id.to_string(),
        })?;

        if let Some(title) = request.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(Error::InvalidInput {
                    reason: "Album title cannot be empty".to_string(),
                });
            }
            album.title = title;
        }
        if let Some(description) = request.description {
            album.description = description;
        }
        if let Some(cover_url) = request.cover_url {
            album.cover_url = cover_url;
        }
        if let Some(release_date) = request.release_date {
            album.release_date = release_date;
        }
        if let Some(active) = request.active {
            album.active = active;
        }

        // Content must not carry the id field.
        album.id = None;
        let updated: Option<Album> = db
            .update(("album", album_thing.id.to_raw()))
            .content(album)
            .await?;
        let updated = updated.ok_or(Error::AlbumNotFound {
            id: album_id.to_string(),
        })?;

        if let Some(artist_ids) = &request.artist_ids {
            for artist_id in artist_ids {
                if !artist_exists(db, artist_id).await? {
                    return Err(Error::ArtistNotFound {
                        id: artist_id.clone(),
                    });
                }
            }
            db.query("DELETE artist_creates_album WHERE out = $album_thing;")
                .bind(("album_thing", album_thing))
                .await?;
            Self::relate_artists(db, album_id, artist_ids).await?;
        }

        Ok(updated)
    }

    pub async fn delete_album(db: &Surreal<Any>, album_id: &str) -> Result<()> {
        if !album_exists(db, album_id).await? {
            return Err(Error::AlbumNotFound {
                id: album_id.to_string(),
            });
        }
        let album_thing = create_album_thing(album_id);

        // Songs survive; they just lose their album reference.
        db.query(
            "DELETE artist_creates_album WHERE out = $album_thing; \
             DELETE album_contains_song WHERE in = $album_thing; \
             DELETE $album_thing;",
        )
        .bind(("album_thing", album_thing))
        .await?;

        Ok(())
    }

    async fn relate_artists(
        db: &Surreal<Any>,
        album_id: &str,
        artist_ids: &[String],
    ) -> Result<()> {
        let album_thing = create_album_thing(album_id);
        for artist_id in artist_ids {
            db.query("RELATE $artist_thing->artist_creates_album->$album_thing;")
                .bind(("artist_thing", create_artist_thing(artist_id)))
                .bind(("album_thing", album_thing.clone()))
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db.query("CREATE artist:beatles SET name = 'The Beatles', bio = NONE, image_url = NONE, created_at = time::now();")
            .await
            .unwrap();
        db
    }

    fn request(title: &str) -> CreateAlbumRequest {
        CreateAlbumRequest {
            title: title.to_string(),
            description: None,
            cover_url: None,
            release_date: None,
            active: true,
            artist_ids: vec!["beatles".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_and_detail_with_duration() {
        let db = setup_db().await;
        let album = AlbumService::create_album(&db, request("Abbey Road"))
            .await
            .unwrap();
        let id = album.id.unwrap().id.to_raw();

        db.query(
            "CREATE song:1 SET title = 'Come Together', duration_secs = 259, cover_url = NONE, \
                 file_url = '/media/1.mp3', plays = 0, active = true, created_at = time::now(); \
             CREATE song:2 SET title = 'Something', duration_secs = 182, cover_url = NONE, \
                 file_url = '/media/2.mp3', plays = 0, active = true, created_at = time::now(); \
             RELATE $album_thing->album_contains_song->song:1; \
             RELATE $album_thing->album_contains_song->song:2;",
        )
        .bind(("album_thing", create_album_thing(&id)))
        .await
        .unwrap();

        let detail = AlbumService::get_album(&db, &id).await.unwrap();
        assert_eq!(detail.album.title, "Abbey Road");
        assert_eq!(detail.album.artists.len(), 1);
        assert_eq!(detail.total_songs, 2);
        // 259 + 182 = 441 seconds
        assert_eq!(detail.total_duration, "7:21");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_artist() {
        let db = setup_db().await;
        let mut bad = request("Abbey Road");
        bad.artist_ids = vec!["missing".to_string()];

        let err = AlbumService::create_album(&db, bad).await.unwrap_err();
        assert!(matches!(err, Error::ArtistNotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_album_keeps_songs() {
        let db = setup_db().await;
        let album = AlbumService::create_album(&db, request("Abbey Road"))
            .await
            .unwrap();
        let id = album.id.unwrap().id.to_raw();

        db.query(
            "CREATE song:1 SET title = 'Come Together', duration_secs = 259, cover_url = NONE, \
                 file_url = '/media/1.mp3', plays = 0, active = true, created_at = time::now(); \
             RELATE $album_thing->album_contains_song->song:1;",
        )
        .bind(("album_thing", create_album_thing(&id)))
        .await
        .unwrap();

        AlbumService::delete_album(&db, &id).await.unwrap();
        assert!(matches!(
            AlbumService::get_album(&db, &id).await.unwrap_err(),
            Error::AlbumNotFound { .. }
        ));
        assert_eq!(count_table(&db, "song").await.unwrap(), 1);
        assert_eq!(count_table(&db, "album_contains_song").await.unwrap(), 0);
    }
}
