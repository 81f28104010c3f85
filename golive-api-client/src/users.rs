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

//! User endpoints: register, push token, contacts.

use golive_types::{
    requests::{AddContactRequest, RegisterUserRequest, UpdatePushTokenRequest},
    responses::UserProfile,
    Conference,
};

use crate::error::ApiError;
use crate::{parse_json, parse_status_only, GoLiveApiClient};

impl GoLiveApiClient {
    /// Register a user with the backend, or fetch the existing profile for
    /// an already-known `auth_id`.
    ///
    /// Calls `POST /users`.
    pub async fn register_user(
        &self,
        auth_id: &str,
        email: &str,
        display_name: &str,
        push_token: Option<&str>,
    ) -> Result<UserProfile, ApiError> {
        let body = RegisterUserRequest {
            auth_id: auth_id.to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
            push_token: push_token.map(|t| t.to_string()),
        };
        let response = self.post("/users").json(&body).send().await?;
        parse_json(response).await
    }

    /// Overwrite the push token stored for a user. Idempotent.
    ///
    /// Calls `PUT /users/push-token`.
    pub async fn update_push_token(&self, auth_id: &str, token: &str) -> Result<(), ApiError> {
        let body = UpdatePushTokenRequest {
            auth_id: auth_id.to_string(),
            push_token: token.to_string(),
        };
        let response = self.put("/users/push-token").json(&body).send().await?;
        parse_status_only(response).await
    }

    /// List all registered users.
    ///
    /// Calls `GET /users`.
    pub async fn get_all_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        let response = self.get("/users").send().await?;
        parse_json(response).await
    }

    /// Add a contact to a user's contact list.
    ///
    /// Calls `POST /users/contacts`.
    pub async fn add_contact(&self, user_id: &str, contact_id: &str) -> Result<(), ApiError> {
        let body = AddContactRequest {
            user_id: user_id.to_string(),
            contact_id: contact_id.to_string(),
        };
        let response = self.post("/users/contacts").json(&body).send().await?;
        parse_status_only(response).await
    }

    /// List a user's contacts.
    ///
    /// Calls `GET /users/{user_id}/contacts`.
    pub async fn get_user_contacts(&self, user_id: &str) -> Result<Vec<UserProfile>, ApiError> {
        let path = format!("/users/{user_id}/contacts");
        let response = self.get(&path).send().await?;
        parse_json(response).await
    }

    /// List the conferences a user hosts or participates in.
    ///
    /// Calls `GET /conferences/user/{profile_id}`.
    pub async fn get_user_conferences(&self, profile_id: &str) -> Result<Vec<Conference>, ApiError> {
        let path = format!("/conferences/user/{profile_id}");
        let response = self.get(&path).send().await?;
        parse_json(response).await
    }
}
