//! JSON error bodies for the API routes.

use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub trait ErrorToResponse: Serialize {
    fn to_response(&self, code: StatusCode) -> axum::response::Response {
        let mut r = Json(self).into_response();
        *r.status_mut() = code;
        r
    }
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    error: String,
}

impl JsonError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl ErrorToResponse for JsonError {}
