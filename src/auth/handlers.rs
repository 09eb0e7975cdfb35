use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthRequest, SessionToken},
        services::AuthService,
    },
    error::AppResult,
    extract::ValidJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(auth, payload))]
pub async fn signup(
    State(auth): State<AuthService>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> AppResult<(StatusCode, Json<SessionToken>)> {
    let payload = payload.validate()?;
    let token = auth.signup(&payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(token)))
}

#[instrument(skip(auth, payload))]
pub async fn login(
    State(auth): State<AuthService>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> AppResult<Json<SessionToken>> {
    let payload = payload.validate()?;
    let token = auth.login(&payload.email, &payload.password).await?;
    Ok(Json(token))
}
