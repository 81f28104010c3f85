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

//! Navigation intents.
//!
//! A [`NotificationIntent`] is the resolved navigation target the UI must
//! act on: which conference to open, and under which display name and user
//! id. It is ephemeral; it exists only while a single event is routed to
//! the UI and is never persisted.

use golive_types::PushPayload;

/// Where an intent came from. Variants are declared in ascending trust
/// priority, so the derived ordering is the router's conflict-resolution
/// order: cold-start and tap events are explicit, already-validated push
/// routing, whereas a deep link is an arbitrary URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntentOrigin {
    Foreground,
    DeepLink,
    BackgroundTap,
    ColdStart,
}

impl IntentOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentOrigin::Foreground => "foreground",
            IntentOrigin::DeepLink => "deep-link",
            IntentOrigin::BackgroundTap => "background-tap",
            IntentOrigin::ColdStart => "cold-start",
        }
    }
}

/// The resolved target of one conference invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationIntent {
    pub conference_id: String,
    pub display_name: String,
    pub user_id: String,
    pub origin: IntentOrigin,
}

impl NotificationIntent {
    /// Extract an intent from a push payload. `data.conferenceId`,
    /// `data.name`, and `data.uuid` are all required; a payload missing any
    /// of them yields `None` and must be dropped by the caller.
    pub fn from_payload(payload: &PushPayload, origin: IntentOrigin) -> Option<Self> {
        Some(Self {
            conference_id: payload.data.conference_id.clone()?,
            display_name: payload.data.name.clone()?,
            user_id: payload.data.uuid.clone()?,
            origin,
        })
    }
}
