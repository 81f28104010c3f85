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

//! Notification router.
//!
//! The central state machine of the engine. It ingests inbound push messages
//! (foreground, background-tap, cold-start) and deep-link activations,
//! deduplicates them, and emits exactly one navigation intent per distinct
//! conference invitation.
//!
//! State machine: `Idle → PendingIntent → Delivered → Idle`.
//!
//! - The first intent-bearing input of an epoch moves `Idle → PendingIntent`.
//! - While an intent is pending and unconsumed, a later input wins only if
//!   its origin has strictly higher priority (cold-start > background-tap >
//!   deep-link). Equal or lower priority drops: first-one-wins, so a user
//!   mid-navigation is never redirected.
//! - The UI consumes the intent via [`take_intent`](NotificationRouter::take_intent),
//!   moving to `Delivered`; every further input drops until the conference
//!   screen is dismissed and [`reset`](NotificationRouter::reset) returns
//!   the router to `Idle`. This stops a stale background-tap payload from
//!   re-triggering navigation after the user already joined and came home.
//!
//! Foreground messages never navigate. An invitation arriving while the app
//! is active is surfaced as a local notification (never an alert dialog)
//! for the user to act on.

use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;

use golive_types::PushPayload;

use crate::deep_link::parse_deep_link;
use crate::intent::{IntentOrigin, NotificationIntent};
use crate::permissions::{PermissionState, PermissionStore};
use crate::platform::{PushMessaging, CONFERENCE_CALLS_CHANNEL_ID};

/// Title synthesized for foreground display when the payload has none.
const DEFAULT_TITLE: &str = "New Message";

#[derive(Debug, Clone, PartialEq, Eq)]
enum RouterState {
    Idle,
    Pending(NotificationIntent),
    Delivered,
}

/// Mutex-guarded navigation state machine. The guard is the only
/// serialization across the independent input sources; within one source,
/// calls arrive in order, across sources no order is guaranteed.
pub struct NotificationRouter {
    state: Mutex<RouterState>,
    messaging: Arc<dyn PushMessaging>,
    permissions: Arc<PermissionStore>,
}

impl NotificationRouter {
    pub fn new(messaging: Arc<dyn PushMessaging>, permissions: Arc<PermissionStore>) -> Self {
        Self {
            state: Mutex::new(RouterState::Idle),
            messaging,
            permissions,
        }
    }

    /// A push message arrived while the app is active.
    ///
    /// Invitations are displayed as a local notification with synthesized
    /// title/body defaults; nothing navigates. Display is gated on granted
    /// notification permission.
    pub async fn handle_foreground_message(&self, payload: &PushPayload) {
        if !payload.is_invitation() {
            debug!("Ignoring foreground push without conference data");
            return;
        }

        if self.permissions.get().await != PermissionState::Granted {
            debug!("Notification permission not granted, skipping foreground display");
            return;
        }

        let (title, body) = match &payload.notification {
            Some(n) => (
                n.title.as_deref().unwrap_or(DEFAULT_TITLE),
                n.body.as_deref().unwrap_or(""),
            ),
            None => (DEFAULT_TITLE, ""),
        };

        if let Err(e) = self
            .messaging
            .display_notification(CONFERENCE_CALLS_CHANNEL_ID, title, body)
            .await
        {
            warn!("Failed to display foreground notification: {e}");
        }
    }

    /// The user tapped a system notification while the app was backgrounded.
    pub fn handle_background_tap(&self, payload: &PushPayload) {
        self.offer_payload(payload, IntentOrigin::BackgroundTap);
    }

    /// The app was cold-started by a notification tap. Delivered at most
    /// once per launch by the platform.
    pub fn handle_cold_start(&self, payload: &PushPayload) {
        self.offer_payload(payload, IntentOrigin::ColdStart);
    }

    /// A universal link or custom-scheme URI was opened.
    pub fn handle_deep_link(&self, uri: &str) {
        if let Some(intent) = parse_deep_link(uri) {
            self.offer(intent);
        }
    }

    fn offer_payload(&self, payload: &PushPayload, origin: IntentOrigin) {
        match NotificationIntent::from_payload(payload, origin) {
            Some(intent) => self.offer(intent),
            None => warn!(
                "Dropping {} push message with incomplete conference data",
                origin.as_str()
            ),
        }
    }

    /// Offer an intent to the state machine.
    fn offer(&self, intent: NotificationIntent) {
        let mut state = self.state.lock();
        match &*state {
            RouterState::Idle => {
                info!(
                    "Pending navigation to conference {} ({})",
                    intent.conference_id,
                    intent.origin.as_str()
                );
                *state = RouterState::Pending(intent);
            }
            RouterState::Pending(existing) => {
                if intent.origin > existing.origin {
                    info!(
                        "Replacing pending {} intent with higher-priority {} intent for conference {}",
                        existing.origin.as_str(),
                        intent.origin.as_str(),
                        intent.conference_id
                    );
                    *state = RouterState::Pending(intent);
                } else {
                    debug!(
                        "Dropping {} intent for conference {}: {} intent already pending",
                        intent.origin.as_str(),
                        intent.conference_id,
                        existing.origin.as_str()
                    );
                }
            }
            RouterState::Delivered => {
                debug!(
                    "Dropping {} intent for conference {}: navigation already delivered this epoch",
                    intent.origin.as_str(),
                    intent.conference_id
                );
            }
        }
    }

    /// Consume the pending intent. The UI calls this exactly when it opens
    /// the join flow; the router moves to `Delivered` and stays there until
    /// [`reset`](Self::reset).
    pub fn take_intent(&self) -> Option<NotificationIntent> {
        let mut state = self.state.lock();
        if matches!(*state, RouterState::Pending(_)) {
            if let RouterState::Pending(intent) =
                std::mem::replace(&mut *state, RouterState::Delivered)
            {
                debug!("Delivering intent for conference {}", intent.conference_id);
                return Some(intent);
            }
        }
        None
    }

    /// Peek at the pending intent without consuming it.
    pub fn pending_intent(&self) -> Option<NotificationIntent> {
        match &*self.state.lock() {
            RouterState::Pending(intent) => Some(intent.clone()),
            _ => None,
        }
    }

    /// Whether an intent has been delivered and not yet reset.
    pub fn is_delivered(&self) -> bool {
        *self.state.lock() == RouterState::Delivered
    }

    /// The conference screen was dismissed; start a fresh epoch.
    pub fn reset(&self) {
        debug!("Router reset to idle");
        *self.state.lock() = RouterState::Idle;
    }
}
