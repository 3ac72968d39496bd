use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::auth::token_service::{Claims, TokenService};
use crate::error::{Error, Result};
use crate::helpers::thing_helpers::{create_user_thing, parse_id_part};
use crate::models::user::UserRecord;
use crate::AppState;

/// Authenticated request context, resolved fresh from the store so group
/// membership changes take effect on the next request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ctx {
    pub user_id: String,
    pub user: UserRecord,
}

impl Ctx {
    pub fn new(user_id: String, user: UserRecord) -> Self {
        Self { user_id, user }
    }
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

async fn lookup_user(app_state: &AppState, user_id: &str) -> Result<Option<UserRecord>> {
    let mut result = app_state
        .db
        .query("SELECT * FROM $user_thing")
        .bind(("user_thing", create_user_thing(user_id)))
        .await?;
    let user: Option<UserRecord> = result.take(0)?;
    Ok(user)
}

pub async fn mw_auth(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(&req).ok_or(Error::AuthFailNoAuthToken)?;
    let claims: Claims = TokenService::validate_token(token, &app_state.auth_config)?;

    let user_id = parse_id_part(&claims.sub).to_string();
    let user = lookup_user(&app_state, &user_id)
        .await?
        .ok_or(Error::UserNotFound {
            username: claims.sub.clone(),
        })?;

    let ctx = Ctx::new(user_id, user);
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Pass-through variant for public routes that still want attribution: a
/// valid bearer token attaches `Ctx`, anything else goes through anonymous.
pub async fn mw_auth_optional(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    if let Some(token) = bearer_token(&req) {
        if let Ok(claims) = TokenService::validate_token(token, &app_state.auth_config) {
            let user_id = parse_id_part(&claims.sub).to_string();
            if let Some(user) = lookup_user(&app_state, &user_id).await? {
                req.extensions_mut().insert(Ctx::new(user_id, user));
            }
        }
    }

    Ok(next.run(req).await)
}
