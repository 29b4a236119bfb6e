use actix_web::web;
use bcrypt::{hash, verify, DEFAULT_COST};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::error::ApiError;

pub const DUPLICATE_EMAIL: &str = "user with this email already exists.";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Runs bcrypt on the blocking pool so the worker keeps serving requests.
    pub async fn check_password(&self, password: &str) -> Result<bool, ApiError> {
        let password = password.to_string();
        let password_hash = self.password_hash.clone();
        Ok(web::block(move || verify(password, &password_hash)).await??)
    }
}

/// Trims the address and lower-cases its domain part. The local part is left as typed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    name: &str,
) -> Result<User, ApiError> {
    let email = normalize_email(email);
    let password = password.to_string();
    let password_hash = web::block(move || hash(password, DEFAULT_COST)).await??;

    // The UNIQUE constraint settles registrations that race past the caller's pre-check.
    let result = sqlx::query("INSERT INTO users (email, name, password_hash) VALUES (?, ?, ?)")
        .bind(&email)
        .bind(name)
        .bind(&password_hash)
        .execute(pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map_or(false, |db| db.is_unique_violation());
            if duplicate {
                ApiError::field("email", DUPLICATE_EMAIL)
            } else {
                ApiError::Database(e)
            }
        })?;

    Ok(User {
        id: result.last_insert_rowid(),
        email,
        name: name.to_string(),
        password_hash,
    })
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, email, name, password_hash FROM users WHERE email = ?")
        .bind(normalize_email(email))
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, email, name, password_hash FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(normalize_email(email))
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
