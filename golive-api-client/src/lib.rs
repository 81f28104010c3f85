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

//! Cross-platform REST client for the GoLiveChat backend API.
//!
//! Works on desktop and mobile targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use golive_api_client::GoLiveApiClient;
//!
//! # async fn example() -> Result<(), golive_api_client::ApiError> {
//! let client = GoLiveApiClient::new("https://golivechat-backend.example.com/api");
//!
//! let profile = client
//!     .register_user("auth-1", "alice@example.com", "Alice", None)
//!     .await?;
//! println!("Registered as profile {}", profile.id);
//! # Ok(())
//! # }
//! ```

pub mod conferences;
pub mod error;
pub mod users;

pub use error::ApiError;
pub use golive_types;

use reqwest::Client;

/// A typed REST client for the GoLiveChat backend API.
///
/// All methods return strongly-typed bodies from [`golive_types`] and map
/// HTTP errors to [`ApiError`]. The backend returns bare JSON bodies
/// (no envelope).
#[derive(Debug, Clone)]
pub struct GoLiveApiClient {
    base_url: String,
    http: Client,
}

impl GoLiveApiClient {
    /// Create a new client pointing at the given backend base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"https://golivechat-backend.example.com/api"`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Build a GET request.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.get(self.url(path))
    }

    /// Build a POST request.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.post(self.url(path))
    }

    /// Build a PUT request.
    pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.http.put(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Parse a JSON body, returning `T` on success or mapping the status code
/// to [`ApiError`].
pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => Ok(response.json().await?),
        401 => Err(ApiError::NotAuthenticated),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

/// Parse a response where we only care about the status code, not the body.
pub(crate) async fn parse_status_only(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::NotAuthenticated),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::ServerError { status, body: text })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = GoLiveApiClient::new("http://localhost:3000/api/");
        assert_eq!(client.url("/users"), "http://localhost:3000/api/users");
    }
}
