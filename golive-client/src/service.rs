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

//! Notification service lifecycle root.
//!
//! One [`NotificationService`] instance is owned by the process root,
//! constructed once at startup, and passed by reference to dependents. Its
//! instance-level initialization flag replaces the hidden module-level
//! boolean this design descends from, and the subscriptions it owns give
//! provider callbacks deterministic teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;

use crate::permissions::{PermissionState, PermissionStore};
use crate::platform::{AuthProvider, ConferenceBackend, KeyValueStore, PushMessaging, Subscription};
use crate::registration::PushRegistrationManager;
use crate::router::NotificationRouter;

/// Collaborators for [`NotificationService::new`].
pub struct NotificationServiceOptions {
    pub store: Arc<dyn KeyValueStore>,
    pub messaging: Arc<dyn PushMessaging>,
    pub auth: Arc<dyn AuthProvider>,
    pub backend: Arc<dyn ConferenceBackend>,
}

pub struct NotificationService {
    permissions: Arc<PermissionStore>,
    registration: Arc<PushRegistrationManager>,
    router: Arc<NotificationRouter>,
    auth: Arc<dyn AuthProvider>,
    initialized: AtomicBool,
    prompted_this_epoch: AtomicBool,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl NotificationService {
    pub fn new(options: NotificationServiceOptions) -> Self {
        let permissions = Arc::new(PermissionStore::new(
            Arc::clone(&options.store),
            Arc::clone(&options.messaging),
        ));
        let registration = Arc::new(PushRegistrationManager::new(
            Arc::clone(&options.backend),
            Arc::clone(&options.messaging),
            Arc::clone(&permissions),
            Arc::clone(&options.auth),
        ));
        let router = Arc::new(NotificationRouter::new(
            Arc::clone(&options.messaging),
            Arc::clone(&permissions),
        ));

        Self {
            permissions,
            registration,
            router,
            auth: options.auth,
            initialized: AtomicBool::new(false),
            prompted_this_epoch: AtomicBool::new(false),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Wire up push registration for the signed-in user and subscribe to
    /// token refreshes. Idempotent; calls after the first are no-ops.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("Notification service already initialized");
            return;
        }
        info!("Initializing notification service");

        match self.auth.current_user() {
            Some(user) => self.registration.register(&user.auth_id).await,
            None => debug!("Signed out at startup, deferring push registration"),
        }

        let subscription = self.registration.subscribe_token_refresh();
        self.subscriptions.lock().push(subscription);
    }

    /// The app came to the foreground: re-arm the permission re-prompt
    /// throttle for the new epoch.
    pub fn on_foreground(&self) {
        self.prompted_this_epoch.store(false, Ordering::SeqCst);
    }

    /// Prompting policy: a granted decision is final and never re-prompts;
    /// anything else prompts at most once per foreground epoch.
    pub async fn ensure_permission(&self) -> PermissionState {
        let state = self.permissions.get().await;
        if state == PermissionState::Granted {
            return state;
        }
        if self.prompted_this_epoch.swap(true, Ordering::SeqCst) {
            debug!("Already prompted this epoch, keeping permission {}", state.as_str());
            return state;
        }
        self.permissions.request_and_persist().await
    }

    /// Register the push token for a user who just signed in.
    pub async fn register(&self, auth_id: &str) {
        self.registration.register(auth_id).await;
    }

    pub fn permissions(&self) -> Arc<PermissionStore> {
        Arc::clone(&self.permissions)
    }

    pub fn router(&self) -> Arc<NotificationRouter> {
        Arc::clone(&self.router)
    }

    /// Tear down every provider subscription this service owns.
    pub fn shutdown(&self) {
        for subscription in self.subscriptions.lock().drain(..) {
            subscription.unsubscribe();
        }
    }
}
