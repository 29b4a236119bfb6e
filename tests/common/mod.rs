#![allow(dead_code)]

use sqlx::SqlitePool;

use recipe_backend::db;
use recipe_backend::models::session::create_session;
use recipe_backend::models::user::{create_user, User};

pub const TAGS_URL: &str = "/recipe/tags/";

pub async fn test_pool() -> SqlitePool {
    db::connect("sqlite::memory:", 1).await.unwrap()
}

/// Builds the full application around `$pool`, as `main` does.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(recipe_backend::routes::routes::app_configure),
        )
        .await
    };
}

/// Registers a user and opens a session for them, returning the session token.
pub async fn user_with_token(pool: &SqlitePool, email: &str) -> (User, String) {
    let user = create_user(pool, email, "pass123456", "").await.unwrap();
    let session = create_session(pool, user.id, false).await.unwrap();
    (user, session.session_id)
}

pub fn token_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Token {}", token))
}

pub async fn tag_count(pool: &SqlitePool, user_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
