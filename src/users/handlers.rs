use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    extract::ValidJson,
    state::AppState,
    users::{
        dto::{EditUserRequest, PublicUser},
        services::UserService,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(svc))]
pub async fn get_me(
    State(svc): State<UserService>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    Ok(Json(svc.get_me(user_id).await?.into()))
}

#[instrument(skip(svc, payload))]
pub async fn edit_user(
    State(svc): State<UserService>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<EditUserRequest>,
) -> AppResult<Json<PublicUser>> {
    let changes = payload.validate()?;
    Ok(Json(svc.edit_user(user_id, changes).await?.into()))
}
