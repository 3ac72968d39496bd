use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioQuality {
    Low,    // 128kbps
    Medium, // 192kbps
    High,   // 320kbps
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub user: Thing,
    pub dark_theme: bool,
    pub audio_quality: AudioQuality,
    pub default_volume: f32,
    pub shuffle_default: bool,
    pub repeat_default: bool,
}

impl UserSettings {
    pub fn defaults_for(user: Thing) -> Self {
        Self {
            id: None,
            user,
            dark_theme: true,
            audio_quality: AudioQuality::High,
            default_volume: 0.7,
            shuffle_default: false,
            repeat_default: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub dark_theme: Option<bool>,
    pub audio_quality: Option<AudioQuality>,
    pub default_volume: Option<f32>,
    pub shuffle_default: Option<bool>,
    pub repeat_default: Option<bool>,
}
