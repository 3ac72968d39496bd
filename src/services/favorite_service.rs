use serde::Deserialize;
use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::record_helpers::song_exists;
use crate::helpers::thing_helpers::{create_song_thing, create_user_thing};
use crate::models::favorite::FavoriteSong;

pub struct FavoriteService;

impl FavoriteService {
    /// One favorite per user+song; adding twice is a client error.
    pub async fn add_favorite(db: &Surreal<Any>, user_id: &str, song_id: &str) -> Result<()> {
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }
        if Self::is_favorite(db, user_id, song_id).await? {
            return Err(Error::InvalidInput {
                reason: "Song is already in favorites".to_string(),
            });
        }

        db.query(
            "RELATE $user_thing->user_likes_song->$song_thing SET favorited_at = time::now();",
        )
        .bind(("user_thing", create_user_thing(user_id)))
        .bind(("song_thing", create_song_thing(song_id)))
        .await?;

        Ok(())
    }

    pub async fn remove_favorite(db: &Surreal<Any>, user_id: &str, song_id: &str) -> Result<()> {
        db.query("DELETE user_likes_song WHERE in = $user_thing AND out = $song_thing;")
            .bind(("user_thing", create_user_thing(user_id)))
            .bind(("song_thing", create_song_thing(song_id)))
            .await?;
        Ok(())
    }

    pub async fn is_favorite(db: &Surreal<Any>, user_id: &str, song_id: &str) -> Result<bool> {
        #[derive(Deserialize)]
        struct CountRow {
            count: u32,
        }

        let mut response = db
            .query(
                "SELECT count() FROM user_likes_song \
                 WHERE in = $user_thing AND out = $song_thing GROUP ALL;",
            )
            .bind(("user_thing", create_user_thing(user_id)))
            .bind(("song_thing", create_song_thing(song_id)))
            .await?;
        let row: Option<CountRow> = response.take(0)?;
        Ok(row.map(|row| row.count).unwrap_or(0) > 0)
    }

    pub async fn list_favorites(db: &Surreal<Any>, user_id: &str) -> Result<Vec<FavoriteSong>> {
        let sql = "SELECT favorited_at, \
            (SELECT *, \
                (SELECT * FROM <-artist_performs_song<-artist ORDER BY name ASC) AS artists, \
                (SELECT * FROM <-album_contains_song<-album)[0] AS album \
             FROM out)[0] AS song \
            FROM user_likes_song WHERE in = $user_thing \
            ORDER BY favorited_at DESC;";

        let mut response = db
            .query(sql)
            .bind(("user_thing", create_user_thing(user_id)))
            .await?;
        let favorites: Vec<FavoriteSong> = response.take(0)?;
        Ok(favorites)
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
             CREATE song:letitbe SET title = 'Let It Be', duration_secs = 243, cover_url = NONE, \
                 file_url = '/media/1.mp3', plays = 0, active = true, created_at = time::now();",
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_list_and_remove_favorite() {
        let db = setup_db().await;

        FavoriteService::add_favorite(&db, "listener", "letitbe").await.unwrap();
        assert!(FavoriteService::is_favorite(&db, "listener", "letitbe").await.unwrap());

        let favorites = FavoriteService::list_favorites(&db, "listener").await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].song.title, "Let It Be");

        FavoriteService::remove_favorite(&db, "listener", "letitbe").await.unwrap();
        assert!(!FavoriteService::is_favorite(&db, "listener", "letitbe").await.unwrap());
        assert!(FavoriteService::list_favorites(&db, "listener").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_favorite_is_rejected() {
        let db = setup_db().await;

        FavoriteService::add_favorite(&db, "listener", "letitbe").await.unwrap();
        let err = FavoriteService::add_favorite(&db, "listener", "letitbe").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_favorite_unknown_song() {
        let db = setup_db().await;
        let err = FavoriteService::add_favorite(&db, "listener", "missing")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SongNotFound { .. }));
    }
}
