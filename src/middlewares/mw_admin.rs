use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::policy;
use crate::error::{Error, Result};
use crate::middlewares::mw_auth::Ctx;

/// Gates management routes behind the role policy. Must run after `mw_auth`.
/// A non-administrator gets a clean authorization rejection, never a 500.
pub async fn mw_admin(req: Request<Body>, next: Next) -> Result<Response> {
    let ctx = req
        .extensions()
        .get::<Ctx>()
        .ok_or(Error::AuthFailCtxNotInRequestExt)?;

    if !policy::is_administrator(&ctx.user) {
        tracing::warn!(
            user = %ctx.user.username,
            path = %req.uri().path(),
            "management operation denied"
        );
        return Err(Error::PermissionDenied);
    }

    Ok(next.run(req).await)
}
