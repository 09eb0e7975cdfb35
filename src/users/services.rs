use std::sync::Arc;

use axum::extract::FromRef;
use tracing::{info, warn};

use crate::{
    auth::{
        repo::UserRepo,
        repo_types::{User, UserChanges},
    },
    error::{AppError, AppResult, RepoError},
    state::AppState,
};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepo>,
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.users))
    }
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepo>) -> Self {
        Self { users }
    }

    pub async fn get_me(&self, user_id: i32) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))
    }

    pub async fn edit_user(&self, user_id: i32, changes: UserChanges) -> AppResult<User> {
        match self.users.update(user_id, &changes).await {
            Ok(Some(user)) => {
                info!(user_id, "user updated");
                Ok(user)
            }
            Ok(None) => Err(AppError::NotFound(format!("user {user_id}"))),
            Err(RepoError::UniqueViolation) => {
                warn!(user_id, "email already in use");
                Err(AppError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }
}
