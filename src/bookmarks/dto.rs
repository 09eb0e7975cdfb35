use serde::Deserialize;

use crate::{
    bookmarks::repo_types::{BookmarkChanges, NewBookmark},
    error::AppError,
};

fn check_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    Ok(title.to_owned())
}

fn check_link(link: &str) -> Result<String, AppError> {
    let link = link.trim();
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(link.to_owned()),
        _ => Err(AppError::Validation("link must be an http(s) URL".into())),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
}

impl CreateBookmarkRequest {
    pub fn validate(self) -> Result<NewBookmark, AppError> {
        Ok(NewBookmark {
            title: check_title(&self.title)?,
            link: check_link(&self.link)?,
            description: self.description,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl EditBookmarkRequest {
    pub fn validate(self) -> Result<BookmarkChanges, AppError> {
        Ok(BookmarkChanges {
            title: self.title.as_deref().map(check_title).transpose()?,
            link: self.link.as_deref().map(check_link).transpose()?,
            description: self.description,
        })
    }
}
