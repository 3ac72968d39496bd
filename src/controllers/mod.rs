pub mod admin_controller;
pub mod album_controller;
pub mod artist_controller;
pub mod auth_controller;
pub mod favorite_controller;
pub mod library_controller;
pub mod player_controller;
pub mod playlist_controller;
pub mod search_controller;
pub mod song_controller;
pub mod user_controller;
