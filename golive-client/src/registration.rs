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

//! Push registration manager.
//!
//! Obtains the installation's push token and propagates it to the backend,
//! bound to the currently authenticated user. Every step is best-effort:
//! a missed token update only degrades notification delivery, so backend
//! failures are logged and swallowed, and nothing retries beyond the
//! provider's own refresh cadence.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::permissions::{PermissionState, PermissionStore};
use crate::platform::{
    AuthProvider, ConferenceBackend, NotificationChannel, PushMessaging, Subscription,
};

pub struct PushRegistrationManager {
    backend: Arc<dyn ConferenceBackend>,
    messaging: Arc<dyn PushMessaging>,
    permissions: Arc<PermissionStore>,
    auth: Arc<dyn AuthProvider>,
}

impl PushRegistrationManager {
    pub fn new(
        backend: Arc<dyn ConferenceBackend>,
        messaging: Arc<dyn PushMessaging>,
        permissions: Arc<PermissionStore>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            backend,
            messaging,
            permissions,
            auth,
        }
    }

    /// Register this installation's push token for `auth_id`.
    ///
    /// Steps, each independently best-effort:
    /// 1. ensure permission (prompting only when no decision exists yet;
    ///    a persisted denial short-circuits without prompting),
    /// 2. ensure the conference-call notification channel,
    /// 3. fetch the current token,
    /// 4. PUT `{auth_id, token}` to the backend.
    pub async fn register(&self, auth_id: &str) {
        let state = match self.permissions.get().await {
            PermissionState::Unknown => self.permissions.request_and_persist().await,
            state => state,
        };
        if state != PermissionState::Granted {
            info!("Push registration skipped: notification permission {}", state.as_str());
            return;
        }

        // Channel creation is idempotent and safe every launch; a failure
        // degrades display, not token delivery.
        if let Err(e) = self
            .messaging
            .ensure_channel(&NotificationChannel::conference_calls())
            .await
        {
            warn!("Failed to ensure notification channel: {e}");
        }

        let token = match self.messaging.get_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to fetch push token: {e}");
                return;
            }
        };
        debug!("Fetched push token for {auth_id}");

        if let Err(e) = self.backend.update_push_token(auth_id, &token).await {
            warn!("Failed to register push token with backend: {e}");
        }
    }

    /// Subscribe to provider token refreshes for the life of the returned
    /// handle. Each refresh re-resolves the *current* auth state — not the
    /// user at registration time — and propagates the new token; refreshes
    /// while signed out are silently skipped.
    pub fn subscribe_token_refresh(&self) -> Subscription {
        let backend = Arc::clone(&self.backend);
        let auth = Arc::clone(&self.auth);
        self.messaging.on_token_refresh(Box::new(move |token| {
            let Some(user) = auth.current_user() else {
                debug!("Push token refreshed while signed out, skipping backend update");
                return;
            };
            info!("Push token refreshed, propagating for {}", user.auth_id);
            let backend = Arc::clone(&backend);
            tokio::spawn(async move {
                if let Err(e) = backend.update_push_token(&user.auth_id, &token).await {
                    warn!("Failed to propagate refreshed push token: {e}");
                }
            });
        }))
    }
}
