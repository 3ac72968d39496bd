//! Search resolution for the player.
//!
//! A query resolves through a graceful-degradation ladder: exact substring
//! match over titles and artist names first, then a per-word OR fallback,
//! and finally a no-results outcome that keeps the listener on whatever
//! they were already playing instead of dead-ending the session.

use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, sql::Thing, Surreal};

use crate::error::{Error, Result};
use crate::helpers::thing_helpers::parse_id_part;
use crate::models::notice::Notice;
use crate::models::song::Song;

/// Songs the player may actually start: active and backed by an audio file.
const PLAYABLE_FILTER: &str = "active = true AND file_url != NONE AND file_url != ''";

/// Case-insensitive haystack of every artist name attached to a song.
const ARTIST_NAMES_HAYSTACK: &str =
    "string::lowercase(array::join(<-artist_performs_song<-artist.name, ', '))";

const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Redirect to the player carrying a resolved (or preserved) song id.
    Player {
        song_id: String,
        notice: Option<Notice>,
    },
    /// Redirect to the default library view.
    Library { notice: Option<Notice> },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuggestionResults {
    pub results: Vec<SuggestionItem>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuggestionItem {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SuggestionRow {
    id: Thing,
    title: String,
    artist_names: Option<String>,
    cover_url: Option<String>,
}

pub struct SearchService;

impl SearchService {
    /// Resolves a free-text query to exactly one outcome. Never fails on a
    /// miss; only store errors propagate.
    pub async fn resolve(
        db: &Surreal<Any>,
        raw_query: &str,
        current_id: Option<&str>,
    ) -> Result<SearchOutcome> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Library { notice: None });
        }

        let exact = Self::exact_matches(db, query).await?;
        if let Some(song) = exact.first() {
            tracing::debug!(query, song = %song.title, "exact search hit");
            return Ok(SearchOutcome::Player {
                song_id: song_id(song)?,
                notice: None,
            });
        }

        let words: Vec<&str> = query.split_whitespace().collect();
        let suggestions = Self::word_matches(db, &words).await?;
        if let Some(song) = suggestions.first() {
            tracing::debug!(query, suggestion = %song.title, "word-level fallback hit");
            let notice = Notice::info(format!(
                "No results for '{query}', but maybe you meant: {}",
                song.title
            ));
            return Ok(SearchOutcome::Player {
                song_id: song_id(song)?,
                notice: Some(notice),
            });
        }

        let notice = Notice::error(format!("No results found for '{query}'."));
        match current_id {
            Some(id) => Ok(SearchOutcome::Player {
                song_id: parse_id_part(id).to_string(),
                notice: Some(notice),
            }),
            None => Ok(SearchOutcome::Library {
                notice: Some(notice),
            }),
        }
    }

    /// Typeahead lookup: up to five songs whose title or artist name contains
    /// the query, inactive ones included. Empty queries short-circuit without
    /// touching the store.
    pub async fn suggestions(db: &Surreal<Any>, raw_query: &str) -> Result<SuggestionResults> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Ok(SuggestionResults { results: vec![] });
        }

        let sql = format!(
            "SELECT id, title, \
                array::join(<-artist_performs_song<-artist.name, ', ') AS artist_names, \
                cover_url \
             FROM song \
             WHERE string::contains(string::lowercase(title), $term) \
                OR string::contains({ARTIST_NAMES_HAYSTACK}, $term) \
             ORDER BY id ASC \
             LIMIT {SUGGESTION_LIMIT};"
        );

        let mut response = db.query(sql).bind(("term", query.to_lowercase())).await?;
        let rows: Vec<SuggestionRow> = response.take(0)?;

        let results = rows
            .into_iter()
            .map(|row| SuggestionItem {
                id: row.id.id.to_raw(),
                title: row.title,
                artist: row.artist_names.unwrap_or_default(),
                cover: row.cover_url,
            })
            .collect();

        Ok(SuggestionResults { results })
    }

    /// Phase 2: playable songs whose title or any artist name contains the
    /// whole query, case-insensitively, ordered by ascending id.
    async fn exact_matches(db: &Surreal<Any>, query: &str) -> Result<Vec<Song>> {
        let sql = format!(
            "SELECT * FROM song \
             WHERE {PLAYABLE_FILTER} \
               AND (string::contains(string::lowercase(title), $term) \
                 OR string::contains({ARTIST_NAMES_HAYSTACK}, $term)) \
             ORDER BY id ASC;"
        );

        let mut response = db.query(sql).bind(("term", query.to_lowercase())).await?;
        let songs: Vec<Song> = response.take(0)?;
        Ok(songs)
    }

    /// Phase 3: one combined filter, the OR across all words of
    /// (title contains word OR artist name contains word).
    async fn word_matches(db: &Surreal<Any>, words: &[&str]) -> Result<Vec<Song>> {
        if words.is_empty() {
            return Ok(vec![]);
        }

        let clauses: Vec<String> = (0..words.len())
            .map(|i| {
                format!(
                    "string::contains(string::lowercase(title), $w{i}) \
                     OR string::contains({ARTIST_NAMES_HAYSTACK}, $w{i})"
                )
            })
            .collect();

        let sql = format!(
            "SELECT * FROM song WHERE {PLAYABLE_FILTER} AND ({}) ORDER BY id ASC;",
            clauses.join(" OR ")
        );

        let mut query = db.query(sql);
        for (i, word) in words.iter().enumerate() {
            query = query.bind((format!("w{i}"), word.to_lowercase()));
        }

        let mut response = query.await?;
        let songs: Vec<Song> = response.take(0)?;
        Ok(songs)
    }
}

fn song_id(song: &Song) -> Result<String> {
    song.id
        .as_ref()
        .map(|thing| thing.id.to_raw())
        .ok_or_else(|| Error::DbError("song row returned without id".to_string()))
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

    async fn add_artist(db: &Surreal<Any>, id: &str, name: &str) {
        db.query(
            "CREATE type::thing('artist', $id) SET name = $name, bio = NONE, \
             image_url = NONE, created_at = time::now();",
        )
        .bind(("id", id.to_string()))
        .bind(("name", name.to_string()))
        .await
        .unwrap();
    }

    async fn add_song(db: &Surreal<Any>, id: &str, title: &str, active: bool, with_file: bool) {
        let file_url = with_file.then(|| format!("/media/{id}.mp3"));
        db.query(
            "CREATE type::thing('song', $id) SET title = $title, duration_secs = 200, \
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

    async fn relate(db: &Surreal<Any>, artist_id: &str, song_id: &str) {
        db.query(
            "RELATE (type::thing('artist', $artist))->artist_performs_song->\
             (type::thing('song', $song));",
        )
        .bind(("artist", artist_id.to_string()))
        .bind(("song", song_id.to_string()))
        .await
        .unwrap();
    }

    async fn beatles_db() -> Surreal<Any> {
        let db = setup_db().await;
        add_artist(&db, "1", "The Beatles").await;
        add_song(&db, "1", "Let It Be", true, true).await;
        add_song(&db, "2", "Yesterday", false, true).await;
        relate(&db, "1", "1").await;
        relate(&db, "1", "2").await;
        db
    }

    #[tokio::test]
    async fn test_empty_query_goes_to_library_without_notice() {
        let db = setup_db().await;
        let outcome = SearchService::resolve(&db, "   ", None).await.unwrap();
        assert_eq!(outcome, SearchOutcome::Library { notice: None });
    }

    #[tokio::test]
    async fn test_exact_match_by_artist_skips_inactive_songs() {
        let db = beatles_db().await;

        // Both songs belong to The Beatles, but only "Let It Be" is active.
        let outcome = SearchService::resolve(&db, "beatles", None).await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Player {
                song_id: "1".to_string(),
                notice: None,
            }
        );
    }

    #[tokio::test]
    async fn test_exact_match_is_case_insensitive() {
        let db = beatles_db().await;
        let outcome = SearchService::resolve(&db, "LET IT", None).await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Player {
                song_id: "1".to_string(),
                notice: None,
            }
        );
    }

    #[tokio::test]
    async fn test_exact_match_never_reaches_word_fallback() {
        let db = beatles_db().await;
        // "let" matches exactly; a fallback would have attached an info notice.
        let outcome = SearchService::resolve(&db, "let", None).await.unwrap();
        let SearchOutcome::Player { notice, .. } = outcome else {
            panic!("expected player outcome");
        };
        assert!(notice.is_none());
    }

    #[tokio::test]
    async fn test_exact_tie_breaks_by_ascending_id() {
        let db = setup_db().await;
        add_song(&db, "2", "Love Story", true, true).await;
        add_song(&db, "1", "Crazy In Love", true, true).await;

        let outcome = SearchService::resolve(&db, "love", None).await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Player {
                song_id: "1".to_string(),
                notice: None,
            }
        );
    }

    #[tokio::test]
    async fn test_songs_without_file_are_not_candidates() {
        let db = setup_db().await;
        add_song(&db, "1", "Let It Be", true, false).await;

        let outcome = SearchService::resolve(&db, "let it be", None).await.unwrap();
        let SearchOutcome::Library { notice } = outcome else {
            panic!("expected library outcome");
        };
        assert_eq!(notice.unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_word_fallback_matches_any_word() {
        let db = setup_db().await;
        add_artist(&db, "1", "X").await;
        add_song(&db, "1", "Hey", true, true).await;
        add_song(&db, "2", "Love Story", true, true).await;
        relate(&db, "1", "1").await;

        // No song matches the full phrase, but "hey" and "love" each hit one.
        let matches = SearchService::word_matches(&db, &["hey", "jude", "love"])
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].title, "Hey");

        let outcome = SearchService::resolve(&db, "hey jude love", None)
            .await
            .unwrap();
        let SearchOutcome::Player { song_id, notice } = outcome else {
            panic!("expected player outcome");
        };
        assert_eq!(song_id, "1");
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.contains("Hey"));
        assert!(notice.message.contains("hey jude love"));
    }

    #[tokio::test]
    async fn test_word_fallback_matches_artist_names() {
        let db = setup_db().await;
        add_artist(&db, "1", "The Beatles").await;
        add_song(&db, "1", "Yellow Submarine", true, true).await;
        relate(&db, "1", "1").await;

        let outcome = SearchService::resolve(&db, "beatles anthology", None)
            .await
            .unwrap();
        let SearchOutcome::Player { song_id, notice } = outcome else {
            panic!("expected player outcome");
        };
        assert_eq!(song_id, "1");
        assert_eq!(notice.unwrap().level, NoticeLevel::Info);
    }

    #[tokio::test]
    async fn test_no_match_keeps_current_song() {
        let db = beatles_db().await;
        let outcome = SearchService::resolve(&db, "zzz_nomatch", Some("42"))
            .await
            .unwrap();
        let SearchOutcome::Player { song_id, notice } = outcome else {
            panic!("expected player outcome");
        };
        assert_eq!(song_id, "42");
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("zzz_nomatch"));
    }

    #[tokio::test]
    async fn test_no_match_without_current_goes_to_library() {
        let db = beatles_db().await;
        let outcome = SearchService::resolve(&db, "zzz_nomatch", None).await.unwrap();
        let SearchOutcome::Library { notice } = outcome else {
            panic!("expected library outcome");
        };
        assert_eq!(notice.unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_suggestions_cap_at_five_and_ignore_activity() {
        let db = setup_db().await;
        for i in 1..=7 {
            // Odd ids inactive: the typeahead must still return them.
            add_song(&db, &i.to_string(), &format!("Test Song {i}"), i % 2 == 0, true).await;
        }

        let results = SearchService::suggestions(&db, "test").await.unwrap().results;
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].id, "1");
        assert_eq!(results[0].title, "Test Song 1");
    }

    #[tokio::test]
    async fn test_suggestions_empty_query_returns_nothing() {
        let db = setup_db().await;
        add_song(&db, "1", "Anything", true, true).await;

        let results = SearchService::suggestions(&db, "  ").await.unwrap().results;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_suggestions_join_all_artist_names() {
        let db = setup_db().await;
        add_artist(&db, "1", "Queen").await;
        add_artist(&db, "2", "David Bowie").await;
        add_song(&db, "1", "Under Pressure", true, true).await;
        relate(&db, "1", "1").await;
        relate(&db, "2", "1").await;

        let results = SearchService::suggestions(&db, "pressure").await.unwrap().results;
        assert_eq!(results.len(), 1);
        let artist = &results[0].artist;
        assert!(artist.contains("Queen"));
        assert!(artist.contains("David Bowie"));
        assert!(artist.contains(", "));
    }
}
