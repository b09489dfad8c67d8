//! JWT authentication middleware.

use axum::{
    extract::{OriginalUri, Request, State},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::domain::Principal;
use crate::types::InvalidLoginResponse;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl Principal for CurrentUser {
    fn username(&self) -> &str {
        &self.username
    }
}

/// JWT authentication middleware.
///
/// Paths permitted by the security settings pass through untouched. Anything
/// else needs a valid token in the configured header; the resulting
/// `CurrentUser` is injected into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Nested routers see a stripped URI; match against the full path
    let permitted = match request.extensions().get::<OriginalUri>() {
        Some(OriginalUri(uri)) => state.security.permits(uri.path()),
        None => state.security.permits(request.uri().path()),
    };
    if permitted {
        return next.run(request).await;
    }

    let token = request
        .headers()
        .get(state.security.header_string.as_str())
        .and_then(|h| h.to_str().ok())
        .and_then(|value| state.security.extract_token(value));

    let claims = match token.map(|t| state.auth_service.verify_token(t)) {
        Some(Ok(claims)) => claims,
        Some(Err(e)) => {
            tracing::error!("Could not set user authentication: {}", e);
            return unauthorized(&state);
        }
        None => return unauthorized(&state),
    };

    request.extensions_mut().insert(CurrentUser {
        id: claims.id,
        username: claims.username,
    });

    next.run(request).await
}

/// 401 with the configured content type and the invalid-login body.
fn unauthorized(state: &AppState) -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        Json(InvalidLoginResponse::default()),
    )
        .into_response();

    if let Ok(content_type) = HeaderValue::from_str(&state.security.content_type) {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }

    response
}
