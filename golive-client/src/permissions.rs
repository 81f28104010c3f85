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

//! Notification permission store.
//!
//! Persists the user's permission decision under a single key and wraps the
//! OS-level permission collaborator. Platform failures never propagate:
//! they collapse to [`PermissionState::Denied`] (fail closed) with a log
//! line.

use std::sync::Arc;

use log::{debug, warn};

use crate::platform::{KeyValueStore, PushMessaging};

/// Storage key for the persisted permission decision.
const PERMISSION_KEY: &str = "notification_permission";

/// The user's notification-permission decision.
///
/// Once `Granted` has been observed, the prompting policy never shows the
/// dialog again. `Denied` may be re-prompted at most once per app-foreground
/// transition; that throttle lives with the caller, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Unknown => "unknown",
            PermissionState::Granted => "granted",
            PermissionState::Denied => "denied",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "granted" => Some(PermissionState::Granted),
            "denied" => Some(PermissionState::Denied),
            "unknown" => Some(PermissionState::Unknown),
            _ => None,
        }
    }
}

/// Persists and exposes the notification-permission decision.
///
/// This is the single owner of the permission key; no other component
/// writes it.
pub struct PermissionStore {
    store: Arc<dyn KeyValueStore>,
    messaging: Arc<dyn PushMessaging>,
}

impl PermissionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, messaging: Arc<dyn PushMessaging>) -> Self {
        Self { store, messaging }
    }

    /// Read the persisted decision, falling back to a platform query when
    /// nothing has been persisted yet. The fallback result is not persisted;
    /// only [`request_and_persist`](Self::request_and_persist) writes.
    pub async fn get(&self) -> PermissionState {
        match self.store.get(PERMISSION_KEY).await {
            Ok(Some(value)) => {
                if let Some(state) = PermissionState::parse(&value) {
                    return state;
                }
                warn!("Discarding unrecognized persisted permission value: {value:?}");
            }
            Ok(None) => {}
            Err(e) => warn!("Failed to read persisted permission state: {e}"),
        }

        match self.messaging.check_permission().await {
            Ok(true) => PermissionState::Granted,
            Ok(false) => PermissionState::Unknown,
            Err(e) => {
                warn!("Platform permission query failed, treating as denied: {e}");
                PermissionState::Denied
            }
        }
    }

    /// Show the platform permission dialog (at most once per call) and
    /// persist the outcome unconditionally.
    pub async fn request_and_persist(&self) -> PermissionState {
        let state = match self.messaging.request_permission().await {
            Ok(true) => PermissionState::Granted,
            Ok(false) => PermissionState::Denied,
            Err(e) => {
                warn!("Platform permission request failed, treating as denied: {e}");
                PermissionState::Denied
            }
        };

        debug!("Persisting notification permission: {}", state.as_str());
        if let Err(e) = self.store.set(PERMISSION_KEY, state.as_str()).await {
            warn!("Failed to persist permission state: {e}");
        }
        state
    }
}
