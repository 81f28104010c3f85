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

//! Conference endpoints: create, get, participant status, end.

use golive_types::{
    requests::{CreateConferenceRequest, UpdateParticipantStatusRequest},
    responses::ParticipantStatus,
    Conference,
};

use crate::error::ApiError;
use crate::{parse_json, parse_status_only, GoLiveApiClient};

impl GoLiveApiClient {
    /// Create a new conference with the given host and invitees. The backend
    /// pushes an invitation notification to every invitee.
    ///
    /// Calls `POST /conferences`.
    pub async fn create_conference(
        &self,
        host_id: &str,
        participant_ids: &[String],
    ) -> Result<Conference, ApiError> {
        let body = CreateConferenceRequest {
            host_id: host_id.to_string(),
            participant_ids: participant_ids.to_vec(),
        };
        let response = self.post("/conferences").json(&body).send().await?;
        parse_json(response).await
    }

    /// Get a conference by id.
    ///
    /// Calls `GET /conferences/{conference_id}`.
    pub async fn get_conference(&self, conference_id: &str) -> Result<Conference, ApiError> {
        let path = format!("/conferences/{conference_id}");
        let response = self.get(&path).send().await?;
        parse_json(response).await
    }

    /// Overwrite a participant's status. Idempotent; the backend keeps only
    /// the latest observed status (last-write-wins).
    ///
    /// Calls `PUT /conferences/{conference_id}/participants/{profile_id}`.
    pub async fn update_participant_status(
        &self,
        conference_id: &str,
        profile_id: &str,
        status: ParticipantStatus,
    ) -> Result<(), ApiError> {
        let path = format!("/conferences/{conference_id}/participants/{profile_id}");
        let body = UpdateParticipantStatusRequest { status };
        let response = self.put(&path).json(&body).send().await?;
        parse_status_only(response).await
    }

    /// End a conference. Only meaningful for the host.
    ///
    /// Calls `PUT /conferences/{conference_id}/end`.
    pub async fn end_conference(&self, conference_id: &str) -> Result<(), ApiError> {
        let path = format!("/conferences/{conference_id}/end");
        let response = self.put(&path).send().await?;
        parse_status_only(response).await
    }
}
