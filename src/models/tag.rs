use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
}

/// Tags owned by `user_id`, ordered by name descending.
pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>(
        "SELECT id, name, user_id FROM tags WHERE user_id = ? ORDER BY name DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn create_tag(pool: &SqlitePool, user_id: i64, name: &str) -> Result<Tag, sqlx::Error> {
    let result = sqlx::query("INSERT INTO tags (name, user_id) VALUES (?, ?)")
        .bind(name)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(Tag {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        user_id,
    })
}

pub async fn tag_exists(pool: &SqlitePool, user_id: i64, name: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE user_id = ? AND name = ?")
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}
