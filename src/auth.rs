use actix_web::{http::header, HttpRequest};
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::models::session::{delete_session, find_session};

pub const SESSION_COOKIE: &str = "session_id";

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub session_id: String,
}

/// Accepts `Token <key>`, keyword case-insensitive. Other schemes yield `None`.
fn token_from_header(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if !scheme.eq_ignore_ascii_case("token") || parts.next().is_some() {
        return None;
    }
    Some(token)
}

/// The session token presented with the request: `Authorization` header first, then cookie.
pub fn credential(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_header)
        .map(str::to_string);

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    })
}

pub async fn authenticate(
    pool: &SqlitePool,
    req: &HttpRequest,
) -> Result<AuthenticatedUser, ApiError> {
    let session_id = credential(req).ok_or(ApiError::Unauthenticated)?;

    let session = match find_session(pool, &session_id).await? {
        Some(session) => session,
        None => {
            info!("Unknown session ID presented: {}", session_id);
            return Err(ApiError::InvalidToken);
        }
    };

    if session.is_expired(Utc::now()) {
        delete_session(pool, &session_id).await?;
        info!("Session expired for session ID: {}", session_id);
        return Err(ApiError::InvalidToken);
    }

    Ok(AuthenticatedUser {
        user_id: session.user_id,
        session_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn token_header_is_parsed() {
        assert_eq!(token_from_header("Token abc"), Some("abc"));
        assert_eq!(token_from_header("token   abc"), Some("abc"));
        assert_eq!(token_from_header("Bearer abc"), None);
        assert_eq!(token_from_header("Token"), None);
        assert_eq!(token_from_header("Token a b"), None);
    }

    #[test]
    fn header_wins_over_cookie() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Token from-header"))
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();
        assert_eq!(credential(&req).as_deref(), Some("from-header"));
    }

    #[test]
    fn cookie_is_used_without_header() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();
        assert_eq!(credential(&req).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn no_credential_at_all() {
        let req = TestRequest::default().to_http_request();
        assert!(credential(&req).is_none());
    }
}
