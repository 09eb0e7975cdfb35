use async_trait::async_trait;
use sqlx::PgPool;

use crate::bookmarks::repo_types::{Bookmark, BookmarkChanges, NewBookmark};
use crate::error::RepoError;

/// Datastore operations on bookmark records.
///
/// Every lookup or mutation of a single bookmark is conditional on the owner
/// in one statement; a foreign id behaves exactly like a missing one.
#[async_trait]
pub trait BookmarkRepo: Send + Sync {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, RepoError>;
    /// `Ok(None)` when no bookmark has this id and owner.
    async fn find_owned(&self, user_id: i32, id: i32) -> Result<Option<Bookmark>, RepoError>;
    async fn create(&self, user_id: i32, new: &NewBookmark) -> Result<Bookmark, RepoError>;
    /// `Ok(None)` when no bookmark has this id and owner.
    async fn update_owned(
        &self,
        user_id: i32,
        id: i32,
        changes: &BookmarkChanges,
    ) -> Result<Option<Bookmark>, RepoError>;
    /// `Ok(false)` when no bookmark has this id and owner.
    async fn delete_owned(&self, user_id: i32, id: i32) -> Result<bool, RepoError>;
}

#[derive(Clone)]
pub struct PgBookmarkRepo {
    db: PgPool,
}

impl PgBookmarkRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkRepo for PgBookmarkRepo {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Bookmark>, RepoError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_owned(&self, user_id: i32, id: i32) -> Result<Option<Bookmark>, RepoError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, user_id: i32, new: &NewBookmark) -> Result<Bookmark, RepoError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, title, link, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&new.title)
        .bind(&new.link)
        .bind(new.description.as_deref())
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update_owned(
        &self,
        user_id: i32,
        id: i32,
        changes: &BookmarkChanges,
    ) -> Result<Option<Bookmark>, RepoError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
               SET title       = COALESCE($3, title),
                   link        = COALESCE($4, link),
                   description = COALESCE($5, description),
                   updated_at  = now()
             WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.title.as_deref())
        .bind(changes.link.as_deref())
        .bind(changes.description.as_deref())
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete_owned(&self, user_id: i32, id: i32) -> Result<bool, RepoError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
