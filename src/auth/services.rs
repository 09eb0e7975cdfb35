use std::sync::Arc;

use anyhow::Context;
use axum::extract::FromRef;
use tracing::{info, warn};

use crate::{
    auth::{dto::SessionToken, jwt::JwtKeys, password::CredentialHasher, repo::UserRepo},
    error::{AppError, AppResult, RepoError},
    state::AppState,
};

/// Signup and login: hashing, credential checks and token issuance.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepo>,
    hasher: Arc<dyn CredentialHasher>,
    keys: JwtKeys,
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(
            Arc::clone(&state.users),
            Arc::clone(&state.hasher),
            state.jwt.clone(),
        )
    }
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepo>,
        hasher: Arc<dyn CredentialHasher>,
        keys: JwtKeys,
    ) -> Self {
        Self {
            users,
            hasher,
            keys,
        }
    }

    pub async fn signup(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let hash = self.hash(password).await?;

        let user = match self.users.create(email, &hash).await {
            Ok(u) => u,
            Err(RepoError::UniqueViolation) => {
                warn!(email, "email already registered");
                return Err(AppError::Conflict);
            }
            Err(e) => return Err(e.into()),
        };

        info!(user_id = user.id, email = %user.email, "user registered");
        self.issue_token(user.id, &user.email)
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let Some(user) = self.users.find_by_email(email).await? else {
            // Same argon2 cost as a real verify, so response time does not
            // reveal whether the email is registered.
            let _ = self.hash(password).await;
            warn!(email, "login unknown email");
            return Err(AppError::Authentication);
        };

        if !self.verify(password, &user.password_hash).await? {
            warn!(email, user_id = user.id, "login invalid password");
            return Err(AppError::Authentication);
        }

        info!(user_id = user.id, email = %user.email, "user logged in");
        self.issue_token(user.id, &user.email)
    }

    pub fn issue_token(&self, user_id: i32, email: &str) -> AppResult<SessionToken> {
        let access_token = self.keys.issue(user_id, email).context("sign jwt")?;
        Ok(SessionToken { access_token })
    }

    async fn hash(&self, password: &str) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .context("hashing task failed")??;
        Ok(hash)
    }

    async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let hash = hash.to_owned();
        let ok = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .context("verify task failed")??;
        Ok(ok)
    }
}
