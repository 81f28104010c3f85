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

//! Profile cache.
//!
//! The backend assigns every user an application-level profile id, distinct
//! from the auth-subject id the client signs in with. All membership and
//! conference calls key on the profile id, so the mapping is cached locally
//! (one JSON blob per auth id) and resolved before those calls. When the
//! mapping is absent the caller must fail closed: skip the backend call,
//! never crash.

use std::sync::Arc;

use log::warn;

use golive_api_client::ApiError;
use golive_types::UserProfile;

use crate::platform::{AuthUser, ConferenceBackend, KeyValueStore};

fn cache_key(auth_id: &str) -> String {
    format!("user_{auth_id}")
}

pub struct ProfileCache {
    backend: Arc<dyn ConferenceBackend>,
    store: Arc<dyn KeyValueStore>,
}

impl ProfileCache {
    pub fn new(backend: Arc<dyn ConferenceBackend>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { backend, store }
    }

    /// Register `user` with the backend (idempotent) and cache the returned
    /// profile blob locally. Called after every successful sign-in.
    pub async fn register_and_cache(&self, user: &AuthUser) -> Result<UserProfile, ApiError> {
        let email = user.email.as_deref().unwrap_or("");
        let display_name = user
            .display_name
            .clone()
            .or_else(|| {
                user.email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .map(String::from)
            })
            .unwrap_or_else(|| "User".to_string());

        let profile = self
            .backend
            .register_user(&user.auth_id, email, &display_name, None)
            .await?;

        match serde_json::to_string(&profile) {
            Ok(blob) => {
                if let Err(e) = self.store.set(&cache_key(&user.auth_id), &blob).await {
                    warn!("Failed to cache profile for {}: {e}", user.auth_id);
                }
            }
            Err(e) => warn!("Failed to serialize profile for caching: {e}"),
        }
        Ok(profile)
    }

    /// Resolve the cached profile for `auth_id`. Malformed cache entries are
    /// discarded with a warning; storage failures resolve to `None`.
    pub async fn resolve(&self, auth_id: &str) -> Option<UserProfile> {
        let key = cache_key(auth_id);
        match self.store.get(&key).await {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Discarding malformed cached profile for {auth_id}: {e}");
                    if let Err(e) = self.store.remove(&key).await {
                        warn!("Failed to remove malformed cached profile: {e}");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read cached profile for {auth_id}: {e}");
                None
            }
        }
    }
}
