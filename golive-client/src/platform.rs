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

//! Platform collaborator seams.
//!
//! Everything the engine delegates to the host platform or to external SDKs
//! lives behind a trait defined here: key-value persistence, the auth
//! provider, the push messaging provider, the conferencing engine, and the
//! share sheet. Production code wires platform bindings in; tests wire in
//! hand-rolled mocks.
//!
//! Provider events (token refresh, auth-state change) are exposed as
//! subscription methods returning a [`Subscription`] handle. The handle
//! unsubscribes when dropped, so each long-lived owner gets deterministic
//! teardown.

use async_trait::async_trait;

use golive_api_client::{ApiError, GoLiveApiClient};
use golive_types::{responses::ParticipantStatus, Conference, UserProfile};

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

/// Handle for a provider event subscription. Unsubscribes on drop or via
/// [`unsubscribe`](Self::unsubscribe).
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that does nothing on teardown.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Explicitly tear down the subscription.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Key-value persistence
// ---------------------------------------------------------------------------

/// String key-value persistence (the platform's local storage).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Snapshot of the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Auth-provider subject id. Distinct from the backend profile id.
    pub auth_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// The authentication provider (sign-in state only; credential flows are
/// out of scope for the engine).
pub trait AuthProvider: Send + Sync {
    /// The signed-in user at this instant, or `None` when signed out.
    fn current_user(&self) -> Option<AuthUser>;

    /// Subscribe to sign-in/sign-out transitions.
    fn on_auth_state_changed(
        &self,
        handler: Box<dyn Fn(Option<AuthUser>) + Send + Sync>,
    ) -> Subscription;
}

// ---------------------------------------------------------------------------
// Push messaging
// ---------------------------------------------------------------------------

/// Settings for the notification channel used for conference-call alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub high_importance: bool,
    pub vibration: bool,
    pub sound: Option<String>,
}

/// Channel id for conference-call alerts.
pub const CONFERENCE_CALLS_CHANNEL_ID: &str = "conference_calls";

impl NotificationChannel {
    /// The channel every conference-call alert is posted to.
    pub fn conference_calls() -> Self {
        Self {
            id: CONFERENCE_CALLS_CHANNEL_ID.to_string(),
            name: "Conference Calls".to_string(),
            high_importance: true,
            vibration: true,
            sound: Some("default".to_string()),
        }
    }
}

/// The platform push messaging provider.
#[async_trait]
pub trait PushMessaging: Send + Sync {
    /// Query the OS-level notification permission without prompting.
    async fn check_permission(&self) -> anyhow::Result<bool>;

    /// Show the OS permission dialog. Returns whether the user granted it.
    async fn request_permission(&self) -> anyhow::Result<bool>;

    /// Create or update a notification channel. Safe to call every launch.
    async fn ensure_channel(&self, channel: &NotificationChannel) -> anyhow::Result<()>;

    /// Fetch the current push token for this installation.
    async fn get_token(&self) -> anyhow::Result<String>;

    /// Display a local notification on the given channel.
    async fn display_notification(
        &self,
        channel_id: &str,
        title: &str,
        body: &str,
    ) -> anyhow::Result<()>;

    /// Subscribe to token refresh events. The handler receives each new
    /// token issued by the provider.
    fn on_token_refresh(&self, handler: Box<dyn Fn(String) + Send + Sync>) -> Subscription;
}

// ---------------------------------------------------------------------------
// Conferencing engine
// ---------------------------------------------------------------------------

/// Parameters for joining a conference through the external engine.
pub struct EngineJoinRequest {
    pub conference_id: String,
    pub user_id: String,
    pub display_name: String,

    /// Fired exactly once when the session ends for any reason
    /// (user-initiated leave, kicked, or error).
    pub on_leave: Box<dyn FnOnce() + Send>,
}

/// A live conference session owned by the external engine.
pub trait EngineSession: Send + Sync {
    fn conference_id(&self) -> &str;

    /// End the session locally. The engine fires the leave callback that was
    /// passed at join time.
    fn leave(&self);
}

/// The external video-conferencing engine (black box; media transport is
/// entirely its concern). The engine enforces one active session per process.
#[async_trait]
pub trait ConferenceEngine: Send + Sync {
    async fn join(&self, request: EngineJoinRequest) -> anyhow::Result<Box<dyn EngineSession>>;
}

// ---------------------------------------------------------------------------
// Share sheet
// ---------------------------------------------------------------------------

/// The platform share sheet.
#[async_trait]
pub trait ShareSheet: Send + Sync {
    async fn share(&self, message: &str) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// Backend surface
// ---------------------------------------------------------------------------

/// The slice of the backend REST surface the engine calls.
///
/// [`GoLiveApiClient`] implements this by delegation; tests substitute a
/// recording mock.
#[async_trait]
pub trait ConferenceBackend: Send + Sync {
    async fn register_user(
        &self,
        auth_id: &str,
        email: &str,
        display_name: &str,
        push_token: Option<&str>,
    ) -> Result<UserProfile, ApiError>;

    async fn update_push_token(&self, auth_id: &str, token: &str) -> Result<(), ApiError>;

    async fn create_conference(
        &self,
        host_id: &str,
        participant_ids: &[String],
    ) -> Result<Conference, ApiError>;

    async fn update_participant_status(
        &self,
        conference_id: &str,
        profile_id: &str,
        status: ParticipantStatus,
    ) -> Result<(), ApiError>;

    async fn end_conference(&self, conference_id: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl ConferenceBackend for GoLiveApiClient {
    async fn register_user(
        &self,
        auth_id: &str,
        email: &str,
        display_name: &str,
        push_token: Option<&str>,
    ) -> Result<UserProfile, ApiError> {
        GoLiveApiClient::register_user(self, auth_id, email, display_name, push_token).await
    }

    async fn update_push_token(&self, auth_id: &str, token: &str) -> Result<(), ApiError> {
        GoLiveApiClient::update_push_token(self, auth_id, token).await
    }

    async fn create_conference(
        &self,
        host_id: &str,
        participant_ids: &[String],
    ) -> Result<Conference, ApiError> {
        GoLiveApiClient::create_conference(self, host_id, participant_ids).await
    }

    async fn update_participant_status(
        &self,
        conference_id: &str,
        profile_id: &str,
        status: ParticipantStatus,
    ) -> Result<(), ApiError> {
        GoLiveApiClient::update_participant_status(self, conference_id, profile_id, status).await
    }

    async fn end_conference(&self, conference_id: &str) -> Result<(), ApiError> {
        GoLiveApiClient::end_conference(self, conference_id).await
    }
}
