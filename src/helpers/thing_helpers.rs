use surrealdb::sql::Thing;

/// Extracts the raw id part from either `table:id` or a bare id.
pub fn parse_id_part(id: &str) -> &str {
    if let Some(id_part) = id.split(':').nth(1) {
        id_part
    } else {
        id
    }
}

pub fn thing_to_string(thing: &Thing) -> String {
    format!("{}:{}", thing.tb, thing.id.to_raw())
}

pub fn create_song_thing(song_id: &str) -> Thing {
    let clean_id = parse_id_part(song_id);
    Thing::from(("song".to_string(), clean_id.to_string()))
}

pub fn create_artist_thing(artist_id: &str) -> Thing {
    let clean_id = parse_id_part(artist_id);
    Thing::from(("artist".to_string(), clean_id.to_string()))
}

pub fn create_album_thing(album_id: &str) -> Thing {
    let clean_id = parse_id_part(album_id);
    Thing::from(("album".to_string(), clean_id.to_string()))
}

pub fn create_user_thing(user_id: &str) -> Thing {
    let clean_id = parse_id_part(user_id);
    Thing::from(("user".to_string(), clean_id.to_string()))
}

pub fn create_playlist_thing(playlist_id: &str) -> Thing {
    let clean_id = parse_id_part(playlist_id);
    Thing::from(("playlist".to_string(), clean_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_part() {
        assert_eq!(parse_id_part("song:123"), "123");
        assert_eq!(parse_id_part("123"), "123");
        assert_eq!(parse_id_part("user:some_user"), "some_user");
    }

    #[test]
    fn test_create_things() {
        let song_thing = create_song_thing("song:56");
        assert_eq!(song_thing.tb, "song");
        assert_eq!(song_thing.id.to_raw(), "56");

        let artist_thing = create_artist_thing("78");
        assert_eq!(artist_thing.tb, "artist");
        assert_eq!(artist_thing.id.to_raw(), "78");

        let user_thing = create_user_thing("user:12");
        assert_eq!(thing_to_string(&user_thing), "user:12");
    }
}
