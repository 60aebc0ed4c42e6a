use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Reads the session token from `Authorization` (bare or `Bearer <token>`),
/// falling back to the `auth_token` cookie.
pub fn extract_token(req: &Request, jar: &CookieJar) -> Option<String> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    match header {
        Some(h) => Some(h.strip_prefix("Bearer ").unwrap_or(h).trim().to_string()),
        None => jar
            .get(AUTH_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty()),
    }
}

/// Resolves the token to a `CurrentUser` and stores it in the request
/// extensions; rejects with 401 before any handler runs.
pub async fn require_token(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = extract_token(&req, &jar) else {
        tracing::warn!(path = %path, "missing Authorization header and auth_token cookie");
        return Err(JsonApiError::unauthorized());
    };
    let user = state.users.authenticate(&token).await.map_err(|e| {
        tracing::warn!(path = %path, err = %e, "token validation failed");
        JsonApiError::unauthorized()
    })?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::COOKIE;
    use axum::http::HeaderMap;

    fn request(header: Option<&str>) -> Request {
        let mut b = axum::http::Request::builder().uri("/api/contacts");
        if let Some(h) = header {
            b = b.header(AUTHORIZATION, h);
        }
        b.body(Body::empty()).unwrap()
    }

    #[test]
    fn accepts_bare_and_bearer_tokens() {
        let jar = CookieJar::new();
        assert_eq!(extract_token(&request(Some("abc")), &jar).as_deref(), Some("abc"));
        assert_eq!(extract_token(&request(Some("Bearer abc")), &jar).as_deref(), Some("abc"));
    }

    #[test]
    fn falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "theme=dark; auth_token=xyz".parse().unwrap());
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(extract_token(&request(None), &jar).as_deref(), Some("xyz"));
        assert_eq!(extract_token(&request(None), &CookieJar::new()), None);
    }
}
