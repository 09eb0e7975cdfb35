use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::{
    jwt::JwtKeys,
    password::{Argon2Hasher, CredentialHasher},
    repo::{PgUserRepo, UserRepo},
};
use crate::bookmarks::repo::{BookmarkRepo, PgBookmarkRepo};
use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepo>,
    pub bookmarks: Arc<dyn BookmarkRepo>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub jwt: JwtKeys,
}

impl AppState {
    /// Connects to Postgres, runs migrations and wires the real collaborators.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let pool = db::connect(&config).await?;
        db::migrate(&pool).await?;

        Ok(Self::from_parts(
            Arc::clone(&config),
            Arc::new(PgUserRepo::new(pool.clone())),
            Arc::new(PgBookmarkRepo::new(pool)),
            Arc::new(Argon2Hasher::default()),
            JwtKeys::new(&config.jwt),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserRepo>,
        bookmarks: Arc<dyn BookmarkRepo>,
        hasher: Arc<dyn CredentialHasher>,
        jwt: JwtKeys,
    ) -> Self {
        Self {
            config,
            users,
            bookmarks,
            hasher,
            jwt,
        }
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}
