pub mod album_service;
pub mod artist_service;
pub mod auth_service;
pub mod favorite_service;
pub mod library_service;
pub mod player_service;
pub mod playlist_service;
pub mod search_service;
pub mod settings_service;
pub mod song_service;
