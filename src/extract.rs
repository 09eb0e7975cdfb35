use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json<T>` whose rejections surface as `AppError::Validation` (400).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
