use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    bookmarks::{
        dto::{CreateBookmarkRequest, EditBookmarkRequest},
        repo_types::Bookmark,
        services::BookmarkService,
    },
    error::{AppError, AppResult},
    extract::ValidJson,
    state::AppState,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark)
                .patch(update_bookmark)
                .delete(delete_bookmark),
        )
}

#[instrument(skip(svc))]
pub async fn list_bookmarks(
    State(svc): State<BookmarkService>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Bookmark>>> {
    Ok(Json(svc.list_bookmarks(user_id).await?))
}

#[instrument(skip(svc))]
pub async fn get_bookmark(
    State(svc): State<BookmarkService>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Bookmark>> {
    svc.get_bookmark(user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("bookmark {id}")))
}

#[instrument(skip(svc, payload))]
pub async fn create_bookmark(
    State(svc): State<BookmarkService>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<CreateBookmarkRequest>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Bookmark>)> {
    let new = payload.validate()?;
    let bookmark = svc.create_bookmark(user_id, new).await?;
    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(bookmark)))
}

#[instrument(skip(svc, payload))]
pub async fn update_bookmark(
    State(svc): State<BookmarkService>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<EditBookmarkRequest>,
) -> AppResult<Json<Bookmark>> {
    let changes = payload.validate()?;
    Ok(Json(svc.update_bookmark_by_id(user_id, id, changes).await?))
}

#[instrument(skip(svc))]
pub async fn delete_bookmark(
    State(svc): State<BookmarkService>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    svc.delete_bookmark_by_id(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
