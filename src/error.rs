use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    LoginFail,

    // -- Auth errors.
    AuthFailNoAuthToken,
    AuthFailInvalidToken(String),
    AuthFailCtxNotInRequestExt,
    PermissionDenied,

    // -- User errors.
    InvalidUsername,
    InvalidPassword,
    UserAlreadyExists { username: String },
    UserNotFound { username: String },

    // -- Catalog errors.
    SongNotFound { id: String },
    ArtistNotFound { id: String },
    AlbumNotFound { id: String },
    PlaylistNotFound { id: String },
    InvalidInput { reason: String },

    // -- Infrastructure errors.
    ConfigMissing(String),
    PasswordHash(String),
    DbError(String),
    Io(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, client_error) = self.client_status_and_error();

        let response_body = serde_json::json!({
            "error": client_error.as_ref(),
            "details": self.to_string()
        });

        (status_code, Json(response_body)).into_response()
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::LoginFail | Self::InvalidPassword => {
                (StatusCode::FORBIDDEN, ClientError::LOGIN_FAIL)
            }

            Self::AuthFailNoAuthToken
            | Self::AuthFailInvalidToken(_)
            | Self::AuthFailCtxNotInRequestExt => (StatusCode::FORBIDDEN, ClientError::NO_AUTH),

            Self::PermissionDenied => (StatusCode::FORBIDDEN, ClientError::PERMISSION_DENIED),

            Self::InvalidUsername | Self::InvalidInput { .. } => {
                (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS)
            }

            Self::UserAlreadyExists { .. } => (StatusCode::CONFLICT, ClientError::ALREADY_EXISTS),

            Self::UserNotFound { .. }
            | Self::SongNotFound { .. }
            | Self::ArtistNotFound { .. }
            | Self::AlbumNotFound { .. }
            | Self::PlaylistNotFound { .. } => {
                (StatusCode::NOT_FOUND, ClientError::RESOURCE_NOT_FOUND)
            }

            Self::ConfigMissing(_) | Self::PasswordHash(_) | Self::DbError(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    LOGIN_FAIL,
    NO_AUTH,
    PERMISSION_DENIED,
    INVALID_PARAMS,
    ALREADY_EXISTS,
    SERVICE_ERROR,
    RESOURCE_NOT_FOUND,
}

impl From<surrealdb::Error> for Error {
    fn from(err: surrealdb::Error) -> Self {
        Error::DbError(err.to_string())
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigMissing(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::AuthFailInvalidToken(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(err: bcrypt::BcryptError) -> Self {
        Error::PasswordHash(err.to_string())
    }
}
