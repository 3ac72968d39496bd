use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, Surreal};

use crate::error::Result;
use crate::helpers::record_helpers::count_table;
use crate::models::album::AlbumWithArtists;
use crate::models::artist::ArtistWithCounts;
use crate::models::genre::Genre;
use crate::models::song::SongWithRelations;

const LIBRARY_ARTISTS: u32 = 12;
const LIBRARY_ALBUMS: u32 = 8;
const LIBRARY_RECENT_SONGS: u32 = 12;

const ARTIST_COUNTS: &str = "count(->artist_performs_song) AS songs_count, \
     count(->artist_creates_album) AS albums_count";

const ALBUM_ARTISTS: &str = "<-artist_creates_album<-artist.* AS artists";

const SONG_RELATIONS: &str = "(SELECT * FROM <-artist_performs_song<-artist ORDER BY name ASC) AS artists, \
     (SELECT * FROM <-album_contains_song<-album)[0] AS album";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LibraryOverview {
    pub artists: Vec<ArtistWithCounts>,
    pub albums: Vec<AlbumWithArtists>,
    pub recent_songs: Vec<SongWithRelations>,
    pub songs: Vec<SongWithRelations>,
    pub total_artists: u64,
    pub total_albums: u64,
    pub total_songs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoadMorePage<T> {
    pub data: Vec<T>,
    pub has_more: bool,
}

pub struct LibraryService;

impl LibraryService {
    /// The home view: artist and album grids, recent uploads, full song list
    /// and the totals shown in the sidebar.
    pub async fn overview(db: &Surreal<Any>) -> Result<LibraryOverview> {
        let artists_sql = format!(
            "SELECT *, {ARTIST_COUNTS} FROM artist ORDER BY name ASC LIMIT {LIBRARY_ARTISTS};"
        );
        let mut response = db.query(artists_sql).await?;
        let artists: Vec<ArtistWithCounts> = response.take(0)?;

        let albums_sql = format!(
            "SELECT *, {ALBUM_ARTISTS} FROM album ORDER BY release_date DESC LIMIT {LIBRARY_ALBUMS};"
        );
        let mut response = db.query(albums_sql).await?;
        let albums: Vec<AlbumWithArtists> = response.take(0)?;

        let recent_sql = format!(
            "SELECT *, {SONG_RELATIONS} FROM song ORDER BY created_at DESC LIMIT {LIBRARY_RECENT_SONGS};"
        );
        let mut response = db.query(recent_sql).await?;
        let recent_songs: Vec<SongWithRelations> = response.take(0)?;

        let songs_sql = format!("SELECT *, {SONG_RELATIONS} FROM song ORDER BY title ASC;");
        let mut response = db.query(songs_sql).await?;
        let songs: Vec<SongWithRelations> = response.take(0)?;

        Ok(LibraryOverview {
            artists,
            albums,
            recent_songs,
            songs,
            total_artists: count_table(db, "artist").await?,
            total_albums: count_table(db, "album").await?,
            total_songs: count_table(db, "song").await?,
        })
    }

    pub async fn more_artists(
        db: &Surreal<Any>,
        offset: u32,
        limit: u32,
    ) -> Result<LoadMorePage<ArtistWithCounts>> {
        let sql = format!(
            "SELECT *, {ARTIST_COUNTS} FROM artist ORDER BY name ASC LIMIT $limit START $offset;"
        );
        let mut response = db
            .query(sql)
            .bind(("limit", limit))
            .bind(("offset", offset))
            .await?;
        let artists: Vec<ArtistWithCounts> = response.take(0)?;

        let total = count_table(db, "artist").await?;
        Ok(LoadMorePage {
            data: artists,
            has_more: total > (offset + limit) as u64,
        })
    }

    pub async fn more_albums(
        db: &Surreal<Any>,
        offset: u32,
        limit: u32,
    ) -> Result<LoadMorePage<AlbumWithArtists>> {
        let sql = format!(
            "SELECT *, {ALBUM_ARTISTS} FROM album \
             ORDER BY release_date DESC LIMIT $limit START $offset;"
        );
        let mut response = db
            .query(sql)
            .bind(("limit", limit))
            .bind(("offset", offset))
            .await?;
        let albums: Vec<AlbumWithArtists> = response.take(0)?;

        let total = count_table(db, "album").await?;
        Ok(LoadMorePage {
            data: albums,
            has_more: total > (offset + limit) as u64,
        })
    }

    pub async fn genres(db: &Surreal<Any>) -> Result<Vec<Genre>> {
        let mut response = db.query("SELECT * FROM genre ORDER BY name ASC;").await?;
        let genres: Vec<Genre> = response.take(0)?;
        Ok(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db
    }

    async fn add_artist(db: &Surreal<Any>, id: u32, name: &str) {
        db.query(
            "CREATE type::thing('artist', $id) SET name = $name, bio = NONE, \
             image_url = NONE, created_at = time::now();",
        )
        .bind(("id", id))
        .bind(("name", name.to_string()))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_overview_counts_and_limits() {
        let db = setup_db().await;
        for i in 1..=15 {
            add_artist(&db, i, &format!("Artist {i:02}")).await;
        }
        db.query(
            "CREATE song:1 SET title = 'Song', duration_secs = 100, cover_url = NONE, \
             file_url = '/media/1.mp3', plays = 0, active = true, created_at = time::now(); \
             RELATE artist:1->artist_performs_song->song:1;",
        )
        .await
        .unwrap();

        let overview = LibraryService::overview(&db).await.unwrap();
        assert_eq!(overview.artists.len(), 12);
        assert_eq!(overview.artists[0].name, "Artist 01");
        assert_eq!(overview.artists[0].songs_count, 1);
        assert_eq!(overview.total_artists, 15);
        assert_eq!(overview.total_songs, 1);
        assert_eq!(overview.songs.len(), 1);
        assert_eq!(overview.songs[0].artists.len(), 1);
    }

    #[tokio::test]
    async fn test_more_artists_pages_by_name() {
        let db = setup_db().await;
        for i in 1..=5 {
            add_artist(&db, i, &format!("Artist {i:02}")).await;
        }

        let page = LibraryService::more_artists(&db, 0, 3).await.unwrap();
        assert_eq!(page.data.len(), 3);
        assert!(page.has_more);

        let page = LibraryService::more_artists(&db, 3, 3).await.unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name, "Artist 04");
        assert!(!page.has_more);
    }
}
