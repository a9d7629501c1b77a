//! Request extractors
//!
//! [`AppJson`] is axum's `Json` with the rejection turned into an
//! [`AppError`], so a body that does not parse still gets the usual
//! `{ "message": ... }` 400 instead of axum's plain-text 415/422.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::{AppError, ErrorCode};

/// JSON body extractor that rejects with [`ErrorCode::InvalidRequest`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(invalid_request(rejection)),
        }
    }
}

fn invalid_request(rejection: JsonRejection) -> AppError {
    tracing::debug!(
        status = rejection.status().as_u16(),
        error = %rejection.body_text(),
        "Rejected request body"
    );
    AppError::new(ErrorCode::InvalidRequest)
}
