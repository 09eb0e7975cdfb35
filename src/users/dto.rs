use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    auth::{
        dto::normalize_email,
        repo_types::{User, UserChanges},
    },
    error::AppError,
};

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl EditUserRequest {
    pub fn validate(self) -> Result<UserChanges, AppError> {
        Ok(UserChanges {
            email: self.email.as_deref().map(normalize_email).transpose()?,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}
