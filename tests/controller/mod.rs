//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, and error handling for all
//! API endpoints. Handlers are invoked directly with extracted `State` and `Path`
//! values against an in-memory SQLite database.

mod character;
mod favorite;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::setup::app_state_for;

/// Reads a JSON response body into a `serde_json::Value`.
async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
