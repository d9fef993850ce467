use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use poeledger_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

use super::templates::{page::RenderPage, pages::error_page::ErrorPage};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error communicating with the economy backend: {0}")]
    EconomyError(#[from] economy_api::Error),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::EconomyError(_) => StatusCode::BAD_GATEWAY,
            ApiError::AnyhowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Error communicating with the economy backend: {0}")]
    EconomyError(#[from] economy_api::Error),
    #[error("No prices found for {item} in {league}")]
    NoPriceData { item: String, league: String },
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::EconomyError(_) => StatusCode::BAD_GATEWAY,
            WebError::NoPriceData { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        let status = self.as_status_code();
        (
            status,
            RenderPage(ErrorPage {
                status,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
