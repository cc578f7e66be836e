use thiserror::Error;

use crate::types::RecipeId;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP {code}")]
    Status { code: u16 },

    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Recipe {id} not found")]
    NotFound { id: RecipeId },

    #[error("Request failed: {0}")]
    Transport(#[from] FetchError),
}
