use serde::{Deserialize, Deserializer};

pub mod album;
pub mod artist;
pub mod favorite;
pub mod genre;
pub mod notice;
pub mod playlist;
pub mod settings;
pub mod song;
pub mod user;

pub mod pagination;

/// Deserializer for clearable update fields: an omitted field stays `None`
/// (leave untouched), an explicit `null` becomes `Some(None)` (clear).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
