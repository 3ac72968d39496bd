pub mod admin_routes;
pub mod album_routes;
pub mod artist_routes;
pub mod auth_routes;
pub mod favorite_routes;
pub mod genre_routes;
pub mod library_routes;
pub mod player_routes;
pub mod playlist_routes;
pub mod search_routes;
pub mod song_routes;
pub mod user_routes;
