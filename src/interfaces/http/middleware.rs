//! Authentication middleware for Axum
//!
//! The bearer token is the user's own identifier (national id or
//! email) issued at login. There is no session or expiry concept:
//! identification is a stateless natural-key lookup on every request.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::{RepositoryProvider, User};

/// Authentication error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    InactiveAccount,
}

/// Authentication state handed to the middleware
#[derive(Clone)]
pub struct AuthState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Authenticated user information resolved from the bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub national_id: String,
}

impl AuthenticatedUser {
    fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            national_id: user.national_id,
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Resolve a bearer pseudo-token to a user via natural-key lookup.
///
/// Returns "not found" uniformly whether the token failed to match a
/// national id or an email.
pub async fn identify_user(repos: &Arc<dyn RepositoryProvider>, token: &str) -> Option<User> {
    repos.users().find_by_natural_key(token).await.ok()?
}

/// Bearer-token authentication middleware
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response(AuthError::MissingToken);
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response(AuthError::InvalidToken);
    };

    match identify_user(&state.repos, token).await {
        Some(user) if !user.is_active => auth_error_response(AuthError::InactiveAccount),
        Some(user) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from_user(user));
            next.run(request).await
        }
        None => auth_error_response(AuthError::InvalidToken),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::InactiveAccount => (StatusCode::FORBIDDEN, "Account is disabled"),
    };

    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (status, body).into_response()
}
