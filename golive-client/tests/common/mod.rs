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

//! Hand-rolled mock collaborators shared by the integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use golive_api_client::ApiError;
use golive_client::platform::{
    AuthProvider, AuthUser, ConferenceBackend, ConferenceEngine, EngineJoinRequest, EngineSession,
    KeyValueStore, NotificationChannel, PushMessaging, ShareSheet, Subscription,
};
use golive_types::{Conference, ConferenceStatus, ParticipantStatus, UserProfile};

/// Let spawned fire-and-forget tasks run to completion.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

pub fn profile(id: &str, auth_id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        auth_id: auth_id.to_string(),
        email: format!("{auth_id}@example.com"),
        display_name: format!("User {auth_id}"),
        push_token: None,
    }
}

pub fn auth_user(auth_id: &str) -> AuthUser {
    AuthUser {
        auth_id: auth_id.to_string(),
        email: Some(format!("{auth_id}@example.com")),
        display_name: Some(format!("User {auth_id}")),
    }
}

// ── Key-value store ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
    pub fail_reads: AtomicBool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.data.lock().insert(key.to_string(), value.to_string());
        store
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.data.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.data.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.data.lock().remove(key);
        Ok(())
    }
}

// ── Auth provider ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAuth {
    pub user: Mutex<Option<AuthUser>>,
}

impl MockAuth {
    pub fn signed_in(auth_id: &str) -> Self {
        Self {
            user: Mutex::new(Some(auth_user(auth_id))),
        }
    }

    pub fn set_user(&self, user: Option<AuthUser>) {
        *self.user.lock() = user;
    }
}

impl AuthProvider for MockAuth {
    fn current_user(&self) -> Option<AuthUser> {
        self.user.lock().clone()
    }

    fn on_auth_state_changed(
        &self,
        _handler: Box<dyn Fn(Option<AuthUser>) + Send + Sync>,
    ) -> Subscription {
        Subscription::noop()
    }
}

// ── Push messaging ───────────────────────────────────────────────────────

pub struct MockMessaging {
    /// Result of `check_permission`.
    pub os_permission: AtomicBool,
    /// Result of `request_permission`.
    pub grant_on_request: AtomicBool,
    pub request_count: AtomicUsize,
    pub token: Mutex<String>,
    pub token_fails: AtomicBool,
    pub channels: Mutex<Vec<NotificationChannel>>,
    pub displayed: Mutex<Vec<(String, String, String)>>,
    refresh_handlers: Arc<Mutex<Vec<Option<Box<dyn Fn(String) + Send + Sync>>>>>,
}

impl Default for MockMessaging {
    fn default() -> Self {
        Self {
            os_permission: AtomicBool::new(false),
            grant_on_request: AtomicBool::new(true),
            request_count: AtomicUsize::new(0),
            token: Mutex::new("token-1".to_string()),
            token_fails: AtomicBool::new(false),
            channels: Mutex::new(Vec::new()),
            displayed: Mutex::new(Vec::new()),
            refresh_handlers: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockMessaging {
    /// Simulate the provider issuing a new token.
    pub fn fire_token_refresh(&self, token: &str) {
        for handler in self.refresh_handlers.lock().iter().flatten() {
            handler(token.to_string());
        }
    }

    pub fn active_refresh_handlers(&self) -> usize {
        self.refresh_handlers.lock().iter().flatten().count()
    }
}

#[async_trait]
impl PushMessaging for MockMessaging {
    async fn check_permission(&self) -> anyhow::Result<bool> {
        Ok(self.os_permission.load(Ordering::SeqCst))
    }

    async fn request_permission(&self) -> anyhow::Result<bool> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.grant_on_request.load(Ordering::SeqCst))
    }

    async fn ensure_channel(&self, channel: &NotificationChannel) -> anyhow::Result<()> {
        self.channels.lock().push(channel.clone());
        Ok(())
    }

    async fn get_token(&self) -> anyhow::Result<String> {
        if self.token_fails.load(Ordering::SeqCst) {
            anyhow::bail!("provider unavailable");
        }
        Ok(self.token.lock().clone())
    }

    async fn display_notification(
        &self,
        channel_id: &str,
        title: &str,
        body: &str,
    ) -> anyhow::Result<()> {
        self.displayed.lock().push((
            channel_id.to_string(),
            title.to_string(),
            body.to_string(),
        ));
        Ok(())
    }

    fn on_token_refresh(&self, handler: Box<dyn Fn(String) + Send + Sync>) -> Subscription {
        let handlers = Arc::clone(&self.refresh_handlers);
        let index = {
            let mut handlers = handlers.lock();
            handlers.push(Some(handler));
            handlers.len() - 1
        };
        let handlers = Arc::clone(&self.refresh_handlers);
        Subscription::new(move || {
            handlers.lock()[index] = None;
        })
    }
}

// ── Conference backend ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    RegisterUser {
        auth_id: String,
    },
    UpdatePushToken {
        auth_id: String,
        token: String,
    },
    CreateConference {
        host_id: String,
    },
    UpdateParticipantStatus {
        conference_id: String,
        profile_id: String,
        status: ParticipantStatus,
    },
    EndConference {
        conference_id: String,
    },
}

#[derive(Default)]
pub struct MockBackend {
    pub calls: Mutex<Vec<BackendCall>>,
    pub fail_status_updates: AtomicBool,
}

impl MockBackend {
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    fn conference(&self, conference_id: &str, host_id: &str) -> Conference {
        Conference {
            conference_id: conference_id.to_string(),
            host: profile(host_id, "host-auth"),
            participants: Vec::new(),
            status: ConferenceStatus::Active,
            shareable_link: Some(format!("https://golivechat.app/conference/{conference_id}")),
        }
    }
}

#[async_trait]
impl ConferenceBackend for MockBackend {
    async fn register_user(
        &self,
        auth_id: &str,
        _email: &str,
        display_name: &str,
        _push_token: Option<&str>,
    ) -> Result<UserProfile, ApiError> {
        self.calls.lock().push(BackendCall::RegisterUser {
            auth_id: auth_id.to_string(),
        });
        Ok(UserProfile {
            id: format!("profile-{auth_id}"),
            auth_id: auth_id.to_string(),
            email: format!("{auth_id}@example.com"),
            display_name: display_name.to_string(),
            push_token: None,
        })
    }

    async fn update_push_token(&self, auth_id: &str, token: &str) -> Result<(), ApiError> {
        self.calls.lock().push(BackendCall::UpdatePushToken {
            auth_id: auth_id.to_string(),
            token: token.to_string(),
        });
        Ok(())
    }

    async fn create_conference(
        &self,
        host_id: &str,
        _participant_ids: &[String],
    ) -> Result<Conference, ApiError> {
        self.calls.lock().push(BackendCall::CreateConference {
            host_id: host_id.to_string(),
        });
        Ok(self.conference("conf-1", host_id))
    }

    async fn update_participant_status(
        &self,
        conference_id: &str,
        profile_id: &str,
        status: ParticipantStatus,
    ) -> Result<(), ApiError> {
        self.calls.lock().push(BackendCall::UpdateParticipantStatus {
            conference_id: conference_id.to_string(),
            profile_id: profile_id.to_string(),
            status,
        });
        if self.fail_status_updates.load(Ordering::SeqCst) {
            return Err(ApiError::ServerError {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }

    async fn end_conference(&self, conference_id: &str) -> Result<(), ApiError> {
        self.calls.lock().push(BackendCall::EndConference {
            conference_id: conference_id.to_string(),
        });
        Ok(())
    }
}

// ── Conferencing engine ──────────────────────────────────────────────────

pub struct MockSession {
    conference_id: String,
    on_leave: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl EngineSession for MockSession {
    fn conference_id(&self) -> &str {
        &self.conference_id
    }

    fn leave(&self) {
        if let Some(on_leave) = self.on_leave.lock().take() {
            on_leave();
        }
    }
}

#[derive(Default)]
pub struct MockEngine {
    pub fail_joins: AtomicBool,
    /// Tear down mid-join: fire the leave callback, then fail the join.
    pub teardown_during_join: AtomicBool,
    pub joined: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl ConferenceEngine for MockEngine {
    async fn join(&self, request: EngineJoinRequest) -> anyhow::Result<Box<dyn EngineSession>> {
        if self.teardown_during_join.load(Ordering::SeqCst) {
            (request.on_leave)();
            anyhow::bail!("engine tore down during join");
        }
        if self.fail_joins.load(Ordering::SeqCst) {
            anyhow::bail!("engine rejected the join");
        }
        self.joined.lock().push((
            request.conference_id.clone(),
            request.user_id.clone(),
            request.display_name.clone(),
        ));
        Ok(Box::new(MockSession {
            conference_id: request.conference_id,
            on_leave: Mutex::new(Some(request.on_leave)),
        }))
    }
}

// ── Share sheet ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockShare {
    pub fail: AtomicBool,
    pub shared: Mutex<Vec<String>>,
}

#[async_trait]
impl ShareSheet for MockShare {
    async fn share(&self, message: &str) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("share sheet dismissed with an error");
        }
        self.shared.lock().push(message.to_string());
        Ok(())
    }
}

// Shared constructors used by both test files.

pub fn arc_defaults() -> (Arc<MemoryStore>, Arc<MockMessaging>, Arc<MockBackend>) {
    (
        Arc::new(MemoryStore::default()),
        Arc::new(MockMessaging::default()),
        Arc::new(MockBackend::default()),
    )
}
