use crate::bookmarks::repo_types::Bookmark;

/// True when the record exists and belongs to `user_id`.
pub fn owns(record: Option<&Bookmark>, user_id: i32) -> bool {
    record.is_some_and(|b| b.user_id == user_id)
}
