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

//! Deep-link route grammar.
//!
//! Fixed grammar, custom scheme and universal-link forms equivalent:
//!
//! - `golivechat://home` → no intent
//! - `golivechat://conference/:conferenceId/:displayName/:userId`
//! - `https://<host>/conference/:conferenceId/:displayName/:userId`
//!
//! Anything else is malformed and drops with a log line; deep links never
//! produce an error the user sees.

use log::{debug, warn};
use url::Url;

use crate::intent::{IntentOrigin, NotificationIntent};

/// The app's custom URI scheme.
pub const APP_SCHEME: &str = "golivechat";

/// Parse a universal link or custom-scheme URI into a navigation intent.
///
/// Returns `None` for the `home` route and for anything malformed.
pub fn parse_deep_link(uri: &str) -> Option<NotificationIntent> {
    let url = match Url::parse(uri) {
        Ok(url) => url,
        Err(e) => {
            warn!("Dropping unparseable deep link {uri:?}: {e}");
            return None;
        }
    };

    let segments: Vec<String> = match url.scheme() {
        "https" => match url.path_segments() {
            Some(path) => path
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => Vec::new(),
        },
        APP_SCHEME => {
            // Custom-scheme links put the route head in the authority:
            // golivechat://conference/C1/Alice/U1 has host "conference".
            let Some(head) = url.host_str() else {
                warn!("Dropping deep link without a route: {uri:?}");
                return None;
            };
            let mut segments = vec![head.to_string()];
            if let Some(path) = url.path_segments() {
                segments.extend(path.filter(|s| !s.is_empty()).map(String::from));
            }
            segments
        }
        other => {
            warn!("Dropping deep link with unexpected scheme {other:?}: {uri:?}");
            return None;
        }
    };

    match segments.as_slice() {
        [head] if head == "home" => {
            debug!("Deep link routed home, no intent");
            None
        }
        [head, conference_id, display_name, user_id]
            if head == "conference"
                && !conference_id.is_empty()
                && !display_name.is_empty()
                && !user_id.is_empty() =>
        {
            Some(NotificationIntent {
                conference_id: conference_id.clone(),
                display_name: display_name.clone(),
                user_id: user_id.clone(),
                origin: IntentOrigin::DeepLink,
            })
        }
        _ => {
            warn!("Dropping deep link that matches no route: {uri:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_scheme_conference_link_parses() {
        let intent = parse_deep_link("golivechat://conference/C1/Alice/U1").unwrap();
        assert_eq!(intent.conference_id, "C1");
        assert_eq!(intent.display_name, "Alice");
        assert_eq!(intent.user_id, "U1");
        assert_eq!(intent.origin, IntentOrigin::DeepLink);
    }

    #[test]
    fn universal_link_is_equivalent() {
        let intent = parse_deep_link("https://golivechat.app/conference/C1/Alice/U1").unwrap();
        assert_eq!(intent.conference_id, "C1");
        assert_eq!(intent.display_name, "Alice");
        assert_eq!(intent.user_id, "U1");
    }

    #[test]
    fn home_route_yields_no_intent() {
        assert!(parse_deep_link("golivechat://home").is_none());
    }

    #[test]
    fn malformed_links_are_dropped() {
        assert!(parse_deep_link("not a url").is_none());
        assert!(parse_deep_link("golivechat://conference/C1/Alice").is_none());
        assert!(parse_deep_link("golivechat://conference/C1/Alice/U1/extra").is_none());
        assert!(parse_deep_link("ftp://golivechat.app/conference/C1/Alice/U1").is_none());
        assert!(parse_deep_link("http://golivechat.app/conference/C1/Alice/U1").is_none());
        assert!(parse_deep_link("https://golivechat.app/elsewhere/C1").is_none());
    }
}
