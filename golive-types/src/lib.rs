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

//! Shared API types for the GoLiveChat conference backend.
//!
//! This crate defines the wire contract between the GoLiveChat backend
//! and its consumers (the client engine, CLI tools, integration tests).
//! It is intentionally framework-agnostic — no HTTP client, no database types.
//!
//! All JSON field names are camelCase, matching the backend.

pub mod push;
pub mod requests;
pub mod responses;

pub use push::PushPayload;
pub use responses::{Conference, ConferenceStatus, Participant, ParticipantStatus, UserProfile};
