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

//! Session coordinator.
//!
//! Orchestrates conference creation and joining: resolves the current user,
//! calls the backend, drives the membership tracker at the correct lifecycle
//! points, and hands off to the external conferencing engine.

use std::sync::Arc;

use log::{info, warn};
use thiserror::Error;

use golive_api_client::ApiError;
use golive_types::Conference;

use crate::membership::MembershipTracker;
use crate::platform::{
    AuthProvider, ConferenceBackend, ConferenceEngine, EngineJoinRequest, EngineSession, ShareSheet,
};
use crate::profile::ProfileCache;
use crate::router::NotificationRouter;

/// User-visible failures from the session coordinator.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A join was attempted while signed out.
    #[error("You must be signed in to join a conference.")]
    NotSignedIn,

    /// The conferencing engine refused or failed the join.
    #[error("Could not join the conference: {0}")]
    Engine(String),

    /// A backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct SessionCoordinator {
    backend: Arc<dyn ConferenceBackend>,
    engine: Arc<dyn ConferenceEngine>,
    membership: Arc<MembershipTracker>,
    profiles: Arc<ProfileCache>,
    auth: Arc<dyn AuthProvider>,
    share: Arc<dyn ShareSheet>,
    router: Arc<NotificationRouter>,
}

impl SessionCoordinator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        backend: Arc<dyn ConferenceBackend>,
        engine: Arc<dyn ConferenceEngine>,
        membership: Arc<MembershipTracker>,
        profiles: Arc<ProfileCache>,
        auth: Arc<dyn AuthProvider>,
        share: Arc<dyn ShareSheet>,
        router: Arc<NotificationRouter>,
    ) -> Self {
        Self {
            backend,
            engine,
            membership,
            profiles,
            auth,
            share,
            router,
        }
    }

    /// Create a conference hosted by `host_profile_id` and share its link.
    ///
    /// The share step is best-effort: the conference exists regardless of
    /// whether sharing succeeds, so a share failure is logged and the
    /// created conference returned anyway.
    pub async fn start_conference(
        &self,
        host_profile_id: &str,
        participant_ids: &[String],
    ) -> Result<Conference, SessionError> {
        let conference = self
            .backend
            .create_conference(host_profile_id, participant_ids)
            .await?;
        info!("Created conference {}", conference.conference_id);

        let message = conference.shareable_link.clone().unwrap_or_else(|| {
            format!("Join my conference: {}", conference.conference_id)
        });
        if let Err(e) = self.share.share(&message).await {
            warn!(
                "Sharing link for conference {} failed: {e}",
                conference.conference_id
            );
        }

        Ok(conference)
    }

    /// Join `conference_id` through the external engine as `display_name`,
    /// using `user_id` as the engine-level identity.
    ///
    /// On successful entry the membership tracker records `joined`; when the
    /// engine reports the session ended — leave, kicked, or error — it
    /// records `declined` and the router starts a fresh epoch. The declined
    /// call is never suppressed, even when teardown races an in-flight join;
    /// the backend's last-write-wins resolves the pair.
    ///
    /// Preventing a re-entrant join for a conference the user is already
    /// inside is the caller's responsibility.
    pub async fn join_conference(
        &self,
        conference_id: &str,
        display_name: &str,
        user_id: &str,
    ) -> Result<Box<dyn EngineSession>, SessionError> {
        let user = self.auth.current_user().ok_or(SessionError::NotSignedIn)?;

        // Membership calls key on the backend profile id. No cached mapping
        // means those calls are skipped (fail closed); the join itself
        // still proceeds.
        let profile_id = self.profiles.resolve(&user.auth_id).await.map(|p| p.id);
        if profile_id.is_none() {
            warn!(
                "No cached profile for {}; membership updates will be skipped",
                user.auth_id
            );
        }

        let membership = Arc::clone(&self.membership);
        let router = Arc::clone(&self.router);
        let leave_profile = profile_id.clone();
        let leave_conference = conference_id.to_string();
        let on_leave: Box<dyn FnOnce() + Send> = Box::new(move || {
            if let Some(profile_id) = leave_profile {
                membership.mark_declined_detached(&leave_conference, &profile_id);
            }
            router.reset();
        });

        let session = self
            .engine
            .join(EngineJoinRequest {
                conference_id: conference_id.to_string(),
                user_id: user_id.to_string(),
                display_name: display_name.to_string(),
                on_leave,
            })
            .await
            .map_err(|e| SessionError::Engine(e.to_string()))?;
        info!("Entered conference {conference_id} as {display_name}");

        if let Some(profile_id) = &profile_id {
            self.membership.mark_joined(conference_id, profile_id).await;
        }

        Ok(session)
    }

    /// End a conference. Only meaningful for the host.
    pub async fn end_conference(&self, conference_id: &str) -> Result<(), SessionError> {
        self.backend.end_conference(conference_id).await?;
        Ok(())
    }
}
