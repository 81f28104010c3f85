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

//! Installation identity.

use log::warn;
use uuid::Uuid;

use crate::platform::KeyValueStore;

const INSTALLATION_ID_KEY: &str = "device_uuid";

/// The stable per-installation id, generating and persisting a fresh UUID
/// on first use. A storage failure falls back to a fresh UUID with a
/// best-effort persist, so callers always get an id.
pub async fn installation_id(store: &dyn KeyValueStore) -> String {
    match store.get(INSTALLATION_ID_KEY).await {
        Ok(Some(id)) if !id.is_empty() => return id,
        Ok(_) => {}
        Err(e) => warn!("Failed to read installation id: {e}"),
    }

    let id = Uuid::new_v4().to_string();
    if let Err(e) = store.set(INSTALLATION_ID_KEY, &id).await {
        warn!("Failed to persist installation id: {e}");
    }
    id
}
