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

//! Conference membership and notification routing engine for GoLiveChat
//! clients.
//!
//! This crate tracks a participant's relationship to a conference
//! (invited → joined/declined), manages notification-permission state and
//! push-token registration with the backend, resolves inbound push messages
//! and deep links into a single navigation intent, and orchestrates
//! creating/joining conferences against the external conferencing engine.
//!
//! It makes no assumptions about the UI: screens consume
//! [`NotificationIntent`]s from the [`NotificationRouter`] and call back into
//! the [`SessionCoordinator`]; rendering, media transport, credential
//! storage, and the auth protocol all live behind the traits in
//! [`platform`].
//!
//! # Outline of usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use golive_client::{NotificationService, NotificationServiceOptions};
//! # async fn example(options: NotificationServiceOptions) {
//! // Process root: construct once, initialize once.
//! let service = Arc::new(NotificationService::new(options));
//! service.initialize().await;
//!
//! // Platform event handlers feed the router.
//! let router = service.router();
//! // router.handle_cold_start(&payload);
//! // router.handle_deep_link("golivechat://conference/C1/Alice/U1");
//!
//! // The UI consumes at most one intent per epoch.
//! if let Some(intent) = router.take_intent() {
//!     // open the join flow for intent.conference_id
//! }
//! # }
//! ```

mod deep_link;
mod device;
mod intent;
mod membership;
mod permissions;
pub mod platform;
mod profile;
mod registration;
mod router;
mod service;
mod session;

pub use deep_link::{parse_deep_link, APP_SCHEME};
pub use device::installation_id;
pub use intent::{IntentOrigin, NotificationIntent};
pub use membership::MembershipTracker;
pub use permissions::{PermissionState, PermissionStore};
pub use profile::ProfileCache;
pub use registration::PushRegistrationManager;
pub use router::NotificationRouter;
pub use service::{NotificationService, NotificationServiceOptions};
pub use session::{SessionCoordinator, SessionError};

pub use golive_api_client::{ApiError, GoLiveApiClient};
pub use golive_types::PushPayload;
