//! Bearer-token gate for protected routes.
//!
//! Handlers opt in by taking an [`Authenticated`] argument. With no tokens
//! configured every request passes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use sagewell_common::ApiError;
use tracing::warn;

use crate::state::SharedState;

const LOGIN_REQUIRED: &str = "请先登录";

/// Proof that the request carried an accepted token.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// Masked token for logging; `None` when auth is disabled.
    pub key_prefix: Option<String>,
}

impl FromRequestParts<SharedState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        if !state.auth_enabled() {
            return Ok(Self { key_prefix: None });
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Unauthorized(LOGIN_REQUIRED.to_string()))?;

        let token = bearer.token();
        if state.config.auth.tokens.iter().any(|t| t == token) {
            Ok(Self { key_prefix: Some(mask_key(token)) })
        } else {
            warn!(key = %mask_key(token), path = %parts.uri.path(), "rejected unknown token");
            Err(ApiError::Unauthorized(LOGIN_REQUIRED.to_string()))
        }
    }
}

/// First 8 chars + "..." so tokens never reach the logs whole.
pub fn mask_key(token: &str) -> String {
    match token.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &token[..cut]),
        None => "***".to_string(),
    }
}
