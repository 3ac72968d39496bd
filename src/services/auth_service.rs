use chrono::Utc;
use surrealdb::{engine::any::Any, Surreal};

use crate::auth::policy::USER_GROUP;
use crate::auth::token_service::{AuthConfig, TokenService};
use crate::auth::password_service;
use crate::error::{Error, Result};
use crate::helpers::thing_helpers::{parse_id_part, thing_to_string};
use crate::models::user::UserRecord;

pub struct AuthService;

impl AuthService {
    /// New accounts always join the "User" group; administrator standing is
    /// granted out of band.
    pub async fn register_user(
        db: &Surreal<Any>,
        username: String,
        password: String,
    ) -> Result<UserRecord> {
        if username.is_empty() || username.len() > 30 || username.contains(' ') {
            return Err(Error::InvalidUsername);
        }

        let mut result = db
            .query("SELECT * FROM user WHERE username = $username;")
            .bind(("username", username.clone()))
            .await?;
        let existing: Option<UserRecord> = result.take(0)?;
        if existing.is_some() {
            return Err(Error::UserAlreadyExists { username });
        }

        let hashed_password = password_service::hash_password(&password)?;
        let new_user = UserRecord {
            id: None,
            username,
            password: hashed_password,
            groups: vec![USER_GROUP.to_string()],
            is_superuser: false,
            created_at: Utc::now().into(),
        };

        db.create("user")
            .content(new_user)
            .await?
            .ok_or(Error::DbError("Could not create user".to_string()))
    }

    pub async fn login_user(
        db: &Surreal<Any>,
        config: &AuthConfig,
        username: String,
        password: String,
    ) -> Result<String> {
        let result: Option<UserRecord> = db
            .query("SELECT * FROM user WHERE username = $username;")
            .bind(("username", username.clone()))
            .await?
            .take(0)?;

        let user: UserRecord = result.ok_or(Error::UserNotFound {
            username: username.clone(),
        })?;

        if !password_service::verify_password(&password, &user.password)? {
            return Err(Error::InvalidPassword);
        }

        match &user.id {
            Some(id) => {
                let thing_str = thing_to_string(id);
                let id_part = parse_id_part(&thing_str);
                TokenService::create_token(id_part.to_string(), config)
            }
            None => Err(Error::LoginFail),
        }
    }

    pub fn token_for(user: &UserRecord, config: &AuthConfig) -> Result<String> {
        match &user.id {
            Some(id) => {
                let thing_str = thing_to_string(id);
                let id_part = parse_id_part(&thing_str);
                TokenService::create_token(id_part.to_string(), config)
            }
            None => Err(Error::LoginFail),
        }
    }
}
