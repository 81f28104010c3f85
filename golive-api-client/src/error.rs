/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Error types for the backend API client.

use thiserror::Error;

/// Errors returned by [`GoLiveApiClient`](crate::GoLiveApiClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request lacked valid credentials (HTTP 401).
    #[error("Not authenticated. Please sign in.")]
    NotAuthenticated,

    /// The requested resource was not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
