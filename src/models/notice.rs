use serde::{Deserialize, Serialize};

/// User-visible message carried across a redirect, the flash-message way:
/// appended to the target as query parameters so the frontend can render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn query_params(&self) -> String {
        format!(
            "notice={}&notice_level={}",
            urlencoding::encode(&self.message),
            self.level
        )
    }
}

/// Redirect target for the player view, optionally carrying a notice.
pub fn player_target(song_id: &str, notice: Option<&Notice>) -> String {
    let mut target = format!("/api/player?id={}", urlencoding::encode(song_id));
    if let Some(notice) = notice {
        target.push('&');
        target.push_str(&notice.query_params());
    }
    target
}

/// Redirect target for the default library view.
pub fn library_target(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!("/api/library?{}", notice.query_params()),
        None => "/api/library".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_target_without_notice() {
        assert_eq!(player_target("42", None), "/api/player?id=42");
    }

    #[test]
    fn test_targets_encode_notice() {
        let notice = Notice::error("No results found for 'zzz nomatch'.");
        let target = player_target("42", Some(&notice));
        assert!(target.starts_with("/api/player?id=42&notice="));
        assert!(target.ends_with("&notice_level=error"));
        assert!(target.contains("zzz%20nomatch"));

        assert_eq!(library_target(None), "/api/library");
        let library = library_target(Some(&Notice::info("hello")));
        assert_eq!(library, "/api/library?notice=hello&notice_level=info");
    }
}
