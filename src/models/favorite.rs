use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;

use crate::models::song::SongWithRelations;

/// One row of a user's favorites list, joined through `user_likes_song`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FavoriteSong {
    pub favorited_at: Datetime,
    pub song: SongWithRelations,
}
