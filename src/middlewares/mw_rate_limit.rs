use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{middlewares::mw_auth::Ctx, AppState};

const MAX_REQUESTS_PER_WINDOW: usize = 150;

/// Coarse per-user/IP rate limit over the cache's TTL window. Generous enough
/// that browsing, searching and skipping songs never trips it.
pub async fn rate_limit_middleware(
    State(app_state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let identifier = req
        .extensions()
        .get::<Ctx>()
        .map(|ctx| format!("user:{}", ctx.user_id))
        .unwrap_or_else(|| format!("ip:{}", addr.ip()));

    let request_id = uuid::Uuid::new_v4();
    let key = format!("rl:{}:{}", identifier, request_id);
    app_state.rate_limit_cache.insert(key, ()).await;

    let prefix = format!("rl:{}:", identifier);
    let window_requests = app_state
        .rate_limit_cache
        .iter()
        .filter(|(k, _)| k.starts_with(&prefix))
        .count();

    if window_requests > MAX_REQUESTS_PER_WINDOW {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }

    Ok(next.run(req).await)
}
