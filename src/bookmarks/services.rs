use std::sync::Arc;

use axum::extract::FromRef;
use tracing::{info, warn};

use crate::{
    bookmarks::{
        ownership::owns,
        repo::BookmarkRepo,
        repo_types::{Bookmark, BookmarkChanges, NewBookmark},
    },
    error::{AppError, AppResult},
    state::AppState,
};

/// Bookmark CRUD scoped to the acting user.
#[derive(Clone)]
pub struct BookmarkService {
    repo: Arc<dyn BookmarkRepo>,
}

impl FromRef<AppState> for BookmarkService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.bookmarks))
    }
}

impl BookmarkService {
    pub fn new(repo: Arc<dyn BookmarkRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_bookmarks(&self, user_id: i32) -> AppResult<Vec<Bookmark>> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    /// `None` when the bookmark is missing or owned by someone else.
    pub async fn get_bookmark(&self, user_id: i32, bookmark_id: i32) -> AppResult<Option<Bookmark>> {
        let bookmark = self.repo.find_owned(user_id, bookmark_id).await?;
        Ok(bookmark.filter(|b| owns(Some(b), user_id)))
    }

    pub async fn create_bookmark(&self, user_id: i32, new: NewBookmark) -> AppResult<Bookmark> {
        let bookmark = self.repo.create(user_id, &new).await?;
        info!(user_id, bookmark_id = bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    pub async fn update_bookmark_by_id(
        &self,
        user_id: i32,
        bookmark_id: i32,
        changes: BookmarkChanges,
    ) -> AppResult<Bookmark> {
        match self.repo.update_owned(user_id, bookmark_id, &changes).await? {
            Some(bookmark) => {
                info!(user_id, bookmark_id, "bookmark updated");
                Ok(bookmark)
            }
            None => {
                warn!(user_id, bookmark_id, "update denied");
                Err(AppError::Forbidden)
            }
        }
    }

    pub async fn delete_bookmark_by_id(&self, user_id: i32, bookmark_id: i32) -> AppResult<()> {
        if !self.repo.delete_owned(user_id, bookmark_id).await? {
            warn!(user_id, bookmark_id, "delete denied");
            return Err(AppError::Forbidden);
        }
        info!(user_id, bookmark_id, "bookmark deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryBookmarkRepo;

    const OWNER: i32 = 1;
    const OTHER: i32 = 2;

    fn service() -> BookmarkService {
        BookmarkService::new(Arc::new(MemoryBookmarkRepo::default()))
    }

    fn new_bookmark() -> NewBookmark {
        NewBookmark {
            title: "T".into(),
            link: "https://x".into(),
            description: Some("d".into()),
        }
    }

    #[tokio::test]
    async fn create_list_delete_roundtrip() {
        let svc = service();
        assert!(svc.list_bookmarks(OWNER).await.unwrap().is_empty());

        let created = svc.create_bookmark(OWNER, new_bookmark()).await.unwrap();
        assert_eq!(created.user_id, OWNER);
        assert_eq!(svc.list_bookmarks(OWNER).await.unwrap(), vec![created.clone()]);

        svc.delete_bookmark_by_id(OWNER, created.id).await.unwrap();
        assert!(svc.list_bookmarks(OWNER).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_only_returns_own_bookmarks() {
        let svc = service();
        svc.create_bookmark(OWNER, new_bookmark()).await.unwrap();
        svc.create_bookmark(OTHER, new_bookmark()).await.unwrap();
        let mine = svc.list_bookmarks(OWNER).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|b| b.user_id == OWNER));
    }

    #[tokio::test]
    async fn get_hides_other_users_bookmarks() {
        let svc = service();
        let b = svc.create_bookmark(OWNER, new_bookmark()).await.unwrap();
        assert_eq!(svc.get_bookmark(OWNER, b.id).await.unwrap(), Some(b.clone()));
        assert_eq!(svc.get_bookmark(OTHER, b.id).await.unwrap(), None);
        assert_eq!(svc.get_bookmark(OWNER, b.id + 100).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_merges_only_given_fields() {
        let svc = service();
        let b = svc.create_bookmark(OWNER, new_bookmark()).await.unwrap();
        let changes = BookmarkChanges {
            description: Some("d2".into()),
            ..Default::default()
        };
        let updated = svc.update_bookmark_by_id(OWNER, b.id, changes).await.unwrap();
        assert_eq!(updated.description.as_deref(), Some("d2"));
        assert_eq!(updated.title, "T");
        assert_eq!(updated.link, "https://x");
    }

    #[tokio::test]
    async fn non_owner_cannot_update_or_delete() {
        let svc = service();
        let b = svc.create_bookmark(OWNER, new_bookmark()).await.unwrap();
        let changes = BookmarkChanges {
            title: Some("hijacked".into()),
            ..Default::default()
        };

        let err = svc.update_bookmark_by_id(OTHER, b.id, changes).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
        let err = svc.delete_bookmark_by_id(OTHER, b.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        assert_eq!(svc.get_bookmark(OWNER, b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn missing_bookmark_is_forbidden_on_mutation() {
        let svc = service();
        let err = svc
            .update_bookmark_by_id(OWNER, 42, BookmarkChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
        let err = svc.delete_bookmark_by_id(OWNER, 42).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }
}
