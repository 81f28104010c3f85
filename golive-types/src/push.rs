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

//! Push message payload contract.
//!
//! Inbound push messages carry an optional `notification` section (title and
//! body, used for foreground display only) and a `data` section. A payload is
//! a *conference invitation* when `data.conferenceId` is present; `data.name`
//! and `data.uuid` carry the invitee's display name and user id.

use serde::{Deserialize, Serialize};

/// An inbound push message, as handed over by the messaging provider.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PushPayload {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notification: Option<PushNotification>,

    #[serde(default)]
    pub data: PushData,
}

/// The display section of a push message. Both fields are optional;
/// consumers synthesize defaults when they are missing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PushNotification {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<String>,
}

/// The data section of a push message. All values arrive as strings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PushData {
    /// Conference the recipient is invited to. Absent on non-invitation
    /// messages; such payloads never trigger navigation.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conference_id: Option<String>,

    /// Display name for the invitee.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// User id for the invitee.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub uuid: Option<String>,
}

impl PushPayload {
    /// Whether this payload carries a conference invitation.
    pub fn is_invitation(&self) -> bool {
        self.data.conference_id.is_some()
    }
}
