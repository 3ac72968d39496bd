use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::thing_helpers::create_user_thing;
use crate::models::settings::{UpdateSettingsRequest, UserSettings};

pub struct SettingsService;

impl SettingsService {
    /// Settings are created lazily with defaults on first read.
    pub async fn get_or_create(db: &Surreal<Any>, user_id: &str) -> Result<UserSettings> {
        let user_thing = create_user_thing(user_id);

        let mut response = db
            .query("SELECT * FROM user_settings WHERE user = $user_thing;")
            .bind(("user_thing", user_thing.clone()))
            .await?;
        let settings: Option<UserSettings> = response.take(0)?;

        match settings {
            Some(settings) => Ok(settings),
            None => db
                .create("user_settings")
                .content(UserSettings::defaults_for(user_thing))
                .await?
                .ok_or(Error::DbError("Could not create user settings".to_string())),
        }
    }

    pub async fn update(
        db: &Surreal<Any>,
        user_id: &str,
        request: UpdateSettingsRequest,
    ) -> Result<UserSettings> {
        if let Some(volume) = request.default_volume {
            if !(0.0..=1.0).contains(&volume) {
                return Err(Error::InvalidInput {
                    reason: "Default volume must be between 0 and 1".to_string(),
                });
            }
        }

        let mut settings = Self::get_or_create(db, user_id).await?;

        if let Some(dark_theme) = request.dark_theme {
            settings.dark_theme = dark_theme;
        }
        if let Some(audio_quality) = request.audio_quality {
            settings.audio_quality = audio_quality;
        }
        if let Some(default_volume) = request.default_volume {
            settings.default_volume = default_volume;
        }
        if let Some(shuffle_default) = request.shuffle_default {
            settings.shuffle_default = shuffle_default;
        }
        if let Some(repeat_default) = request.repeat_default {
            settings.repeat_default = repeat_default;
        }

        let settings_id = settings
            .id
            .as_ref()
            .map(|thing| thing.id.to_raw())
            .ok_or(Error::DbError("settings row without id".to_string()))?;

        // Content must not carry the id field.
        settings.id = None;
        let updated: Option<UserSettings> = db
            .update(("user_settings", settings_id))
            .content(settings)
            .await?;
        updated.ok_or(Error::DbError("Could not update user settings".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::AudioQuality;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> Surreal<Any> {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_defaults_created_on_first_read() {
        let db = setup_db().await;

        let settings = SettingsService::get_or_create(&db, "7").await.unwrap();
        assert!(settings.dark_theme);
        assert_eq!(settings.audio_quality, AudioQuality::High);
        assert!((settings.default_volume - 0.7).abs() < f32::EPSILON);

        // Second read returns the same row, not a new one.
        let again = SettingsService::get_or_create(&db, "7").await.unwrap();
        assert_eq!(settings.id, again.id);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let db = setup_db().await;

        let updated = SettingsService::update(
            &db,
            "7",
            UpdateSettingsRequest {
                dark_theme: Some(false),
                audio_quality: Some(AudioQuality::Low),
                default_volume: None,
                shuffle_default: None,
                repeat_default: None,
            },
        )
        .await
        .unwrap();
        assert!(!updated.dark_theme);
        assert_eq!(updated.audio_quality, AudioQuality::Low);
        assert!((updated.default_volume - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_volume_out_of_range_is_rejected() {
        let db = setup_db().await;

        let err = SettingsService::update(
            &db,
            "7",
            UpdateSettingsRequest {
                dark_theme: None,
                audio_quality: None,
                default_volume: Some(1.5),
                shuffle_default: None,
                repeat_default: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
