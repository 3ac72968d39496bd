use serde::Deserialize;
use surrealdb::{engine::any::Any, sql::Thing, Surreal};

use crate::error::Result;
use crate::helpers::thing_helpers::{create_album_thing, create_artist_thing, create_song_thing};

#[derive(Debug, Deserialize)]
struct AnyRecord {
    #[allow(dead_code)]
    id: Thing,
}

async fn record_exists(db: &Surreal<Any>, thing: Thing) -> Result<bool> {
    let mut response = db
        .query("SELECT id FROM $record;")
        .bind(("record", thing))
        .await?;
    let record: Option<AnyRecord> = response.take(0)?;
    Ok(record.is_some())
}

pub async fn song_exists(db: &Surreal<Any>, song_id: &str) -> Result<bool> {
    record_exists(db, create_song_thing(song_id)).await
}

pub async fn artist_exists(db: &Surreal<Any>, artist_id: &str) -> Result<bool> {
    record_exists(db, create_artist_thing(artist_id)).await
}

pub async fn album_exists(db: &Surreal<Any>, album_id: &str) -> Result<bool> {
    record_exists(db, create_album_thing(album_id)).await
}

/// Total rows in a table. Callers pass fixed table names, never user input.
pub async fn count_table(db: &Surreal<Any>, table: &str) -> Result<u64> {
    #[derive(Deserialize)]
    struct CountRow {
        total: u64,
    }

    let sql = format!("SELECT count() AS total FROM {table} GROUP ALL;");
    let mut response = db.query(sql).await?;
    let row: Option<CountRow> = response.take(0)?;
    Ok(row.map(|row| row.total).unwrap_or(0))
}
