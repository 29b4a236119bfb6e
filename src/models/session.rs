use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub session_id: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub is_persistent: bool,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

pub fn expiry_for(now: DateTime<Utc>, remember_me: bool) -> DateTime<Utc> {
    if remember_me {
        now + Duration::days(10)
    } else {
        now + Duration::minutes(30)
    }
}

pub async fn create_session(
    pool: &SqlitePool,
    user_id: i64,
    remember_me: bool,
) -> Result<Session, sqlx::Error> {
    let session = Session {
        session_id: Uuid::new_v4().to_string(),
        user_id,
        expires_at: expiry_for(Utc::now(), remember_me),
        is_persistent: remember_me,
    };

    sqlx::query(
        "INSERT INTO sessions (session_id, user_id, expires_at, is_persistent) VALUES (?, ?, ?, ?)",
    )
    .bind(&session.session_id)
    .bind(session.user_id)
    .bind(session.expires_at)
    .bind(session.is_persistent)
    .execute(pool)
    .await?;

    Ok(session)
}

pub async fn find_session(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        "SELECT session_id, user_id, expires_at, is_persistent FROM sessions WHERE session_id = ?",
    )
    .bind(session_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session(pool: &SqlitePool, session_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE session_id = ?")
        .bind(session_id)
        .execute(pool)
        .await?;
    Ok(())
}
