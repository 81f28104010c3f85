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

//! Request types for the GoLiveChat backend REST API.
//!
//! These types define the shape of request bodies. They are used by both
//! the server (for deserialization) and clients (for serialization).

use serde::{Deserialize, Serialize};

use crate::responses::ParticipantStatus;

/// Request body for `POST /users`.
///
/// Registration is idempotent: posting an already-known `auth_id` returns
/// the existing profile.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub auth_id: String,
    pub email: String,
    pub display_name: String,

    /// Push token, when one is already available at registration time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub push_token: Option<String>,
}

/// Request body for `PUT /users/push-token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePushTokenRequest {
    pub auth_id: String,
    pub push_token: String,
}

/// Request body for `POST /users/contacts`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddContactRequest {
    pub user_id: String,
    pub contact_id: String,
}

/// Request body for `POST /conferences`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateConferenceRequest {
    /// Profile id of the host.
    pub host_id: String,

    /// Profile ids of the users to invite.
    pub participant_ids: Vec<String>,
}

/// Request body for `PUT /conferences/{id}/participants/{profileId}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateParticipantStatusRequest {
    pub status: ParticipantStatus,
}
