use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::record_helpers::{artist_exists, count_table};
use crate::helpers::thing_helpers::create_artist_thing;
use crate::models::artist::{
    Artist, ArtistWithRelations, CreateArtistRequest, UpdateArtistRequest,
};
use crate::models::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};

pub struct ArtistService;

impl ArtistService {
    pub async fn get_artist(db: &Surreal<Any>, artist_id: &str) -> Result<ArtistWithRelations> {
        let artist_thing = create_artist_thing(artist_id);

        let sql = "SELECT *, \
            (SELECT * FROM ->artist_performs_song->song ORDER BY created_at DESC) AS songs, \
            (SELECT *, <-artist_creates_album<-artist.* AS artists \
                FROM ->artist_creates_album->album ORDER BY release_date DESC) AS albums \
            FROM $artist_thing;";

        let mut response = db.query(sql).bind(("artist_thing", artist_thing)).await?;
        let artist: Option<ArtistWithRelations> = response.take(0)?;

        artist.ok_or(Error::ArtistNotFound {
            id: artist_id.to_string(),
        })
    }

    pub async fn list_artists(
        db: &Surreal<Any>,
        pagination: &PaginationQuery,
    ) -> Result<PaginatedResponse<Artist>> {
        let mut response = db
            .query("SELECT * FROM artist ORDER BY name ASC LIMIT $limit START $offset;")
            .bind(("limit", pagination.page_size()))
            .bind(("offset", pagination.offset()))
            .await?;
        let artists: Vec<Artist> = response.take(0)?;

        let total = count_table(db, "artist").await?;
        Ok(PaginatedResponse {
            data: artists,
            pagination: PaginationInfo::new(pagination.page(), pagination.page_size(), total),
        })
    }

    pub async fn create_artist(db: &Surreal<Any>, request: CreateArtistRequest) -> Result<Artist> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidInput {
                reason: "Artist name cannot be empty".to_string(),
            });
        }

        // Artist names are unique across the catalog.
        let mut response = db
            .query("SELECT * FROM artist WHERE name = $name;")
            .bind(("name", name.clone()))
            .await?;
        let existing: Option<Artist> = response.take(0)?;
        if existing.is_some() {
            return Err(Error::InvalidInput {
                reason: format!("Artist '{name}' already exists"),
            });
        }

        let artist = Artist {
            id: None,
            name,
            bio: request.bio,
            image_url: request.image_url,
            created_at: chrono::Utc::now().into(),
        };

        db.create("artist")
            .content(artist)
            .await?
            .ok_or(Error::DbError("Could not create artist".to_string()))
    }

    pub async fn update_artist(
        db: &Surreal<Any>,
        artist_id: &str,
        request: UpdateArtistRequest,
    ) -> Result<Artist> {
        let artist_thing = create_artist_thing(artist_id);

        let mut response = db
            .query("SELECT * FROM $artist_thing;")
            .bind(("artist_thing", artist_thing.clone()))
            .await?;
        let existing: Option<Artist> = response.take(0)?;
        let mut artist = existing.ok_or(Error::ArtistNotFound {
            id: artist_id.to_string(),
        })?;

        if let Some(name) = request.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(Error::InvalidInput {
                    reason: "Artist name cannot be empty".to_string(),
                });
            }
            artist.name = name;
        }
        if let Some(bio) = request.bio {
            artist.bio = bio;
        }
        if let Some(image_url) = request.image_url {
            artist.image_url = image_url;
        }

        // Content must not carry the id field.
        artist.id = None;
        let updated: Option<Artist> = db
            .update(("artist", artist_thing.id.to_raw()))
            .content(artist)
            .await?;
        updated.ok_or(Error::ArtistNotFound {
            id: artist_id.to_string(),
        })
    }

    pub async fn delete_artist(db: &Surreal<Any>, artist_id: &str) -> Result<()> {
        if !artist_exists(db, artist_id).await? {
            return Err(Error::ArtistNotFound {
                id: artist_id.to_string(),
            });
        }
        let artist_thing = create_artist_thing(artist_id);

        db.query(
            "DELETE artist_performs_song WHERE in = $artist_thing; \
             DELETE artist_creates_album WHERE in = $artist_thing; \
             DELETE $artist_thing;",
        )
        .bind(("artist_thing", artist_thing))
        .await?;

        Ok(())
    }
}
