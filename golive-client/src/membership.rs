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

//! Membership tracker.
//!
//! Owns the per-conference participant status updates: fire-and-forget
//! idempotent PUTs to the backend. `mark_joined` fires immediately after
//! the conferencing engine reports successful entry; `mark_declined` fires
//! whenever the session ends for any reason — explicit leave, navigating
//! away, or teardown. `declined` therefore also means "no longer present";
//! the backend keeps whichever status it received last.
//!
//! The client issues calls in its own lifecycle order and makes no further
//! ordering guarantee; out-of-order arrival is resolved by the backend's
//! last-write-wins.

use std::sync::Arc;

use log::{debug, warn};

use golive_types::responses::ParticipantStatus;

use crate::platform::ConferenceBackend;

pub struct MembershipTracker {
    backend: Arc<dyn ConferenceBackend>,
}

impl MembershipTracker {
    pub fn new(backend: Arc<dyn ConferenceBackend>) -> Self {
        Self { backend }
    }

    /// Record that the user entered the conference.
    pub async fn mark_joined(&self, conference_id: &str, profile_id: &str) {
        self.update(conference_id, profile_id, ParticipantStatus::Joined)
            .await;
    }

    /// Record that the user is no longer present in the conference.
    pub async fn mark_declined(&self, conference_id: &str, profile_id: &str) {
        self.update(conference_id, profile_id, ParticipantStatus::Declined)
            .await;
    }

    /// [`mark_declined`](Self::mark_declined) from a synchronous context
    /// (the engine's leave callback). The call is spawned and never
    /// suppressed, even when it races an in-flight join.
    pub fn mark_declined_detached(self: &Arc<Self>, conference_id: &str, profile_id: &str) {
        let tracker = Arc::clone(self);
        let conference_id = conference_id.to_string();
        let profile_id = profile_id.to_string();
        tokio::spawn(async move {
            tracker.mark_declined(&conference_id, &profile_id).await;
        });
    }

    async fn update(&self, conference_id: &str, profile_id: &str, status: ParticipantStatus) {
        debug!(
            "Updating participant {} in conference {} to {}",
            profile_id,
            conference_id,
            status.as_str()
        );
        if let Err(e) = self
            .backend
            .update_participant_status(conference_id, profile_id, status)
            .await
        {
            warn!(
                "Failed to update participant status to {} for conference {}: {e}",
                status.as_str(),
                conference_id
            );
        }
    }
}
