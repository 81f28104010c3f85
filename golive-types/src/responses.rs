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

//! Response types for the GoLiveChat backend REST API.
//!
//! Endpoints return these bodies directly as JSON (no envelope).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A registered user, as returned by `POST /users`.
///
/// The backend-assigned [`id`](Self::id) is the *profile id*: the key every
/// conference and membership endpoint expects. It is distinct from
/// [`auth_id`](Self::auth_id), the auth-provider subject id the client signs
/// in with. Clients must resolve `auth_id` → `id` before issuing membership
/// calls.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend-assigned profile id.
    #[serde(rename = "_id")]
    pub id: String,

    /// Auth-provider subject id.
    pub auth_id: String,

    pub email: String,
    pub display_name: String,

    /// Current push token for this user's installation, if one was registered.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub push_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Conferences
// ---------------------------------------------------------------------------

/// Lifecycle state of a conference.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceStatus {
    Active,
    Ended,
}

/// A participant's relationship to a conference.
///
/// Note that `declined` is overloaded: the backend uses it both for
/// "explicitly rejected the invitation" and for "joined and then left".
/// Only the latest observed status is stored (last-write-wins, no history).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Invited,
    Joined,
    Declined,
}

impl ParticipantStatus {
    /// Wire representation, for logging and URL paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Invited => "invited",
            ParticipantStatus::Joined => "joined",
            ParticipantStatus::Declined => "declined",
        }
    }
}

/// A (user, status) pair inside a [`Conference`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user: UserProfile,
    pub status: ParticipantStatus,
}

/// A conference, as returned by `POST /conferences` and `GET /conferences/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    pub conference_id: String,
    pub host: UserProfile,
    pub participants: Vec<Participant>,
    pub status: ConferenceStatus,

    /// Link the host can share to invite others.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shareable_link: Option<String>,
}

/// Acknowledgement body for PUT-style endpoints that return no resource.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conference_deserializes_from_backend_json() {
        let json = r#"{
            "conferenceId": "conf-42",
            "host": {
                "_id": "p1",
                "authId": "a1",
                "email": "host@example.com",
                "displayName": "Host"
            },
            "participants": [
                {
                    "user": {
                        "_id": "p2",
                        "authId": "a2",
                        "email": "guest@example.com",
                        "displayName": "Guest",
                        "pushToken": "tok-1"
                    },
                    "status": "invited"
                }
            ],
            "status": "active",
            "shareableLink": "https://golivechat.app/conference/conf-42"
        }"#;

        let conference: Conference = serde_json::from_str(json).unwrap();
        assert_eq!(conference.conference_id, "conf-42");
        assert_eq!(conference.status, ConferenceStatus::Active);
        assert_eq!(conference.host.id, "p1");
        assert_eq!(conference.participants.len(), 1);
        assert_eq!(
            conference.participants[0].status,
            ParticipantStatus::Invited
        );
        assert_eq!(
            conference.participants[0].user.push_token.as_deref(),
            Some("tok-1")
        );
    }

    #[test]
    fn participant_status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&ParticipantStatus::Joined).unwrap(),
            "\"joined\""
        );
        let status: ParticipantStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(status, ParticipantStatus::Declined);
    }
}
