//! Outbound share links and the native share payload.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SITE_NAME: &str = "e-Shoku";

pub const TWITTER_SHARE_URL: &str = "https://twitter.com/share";
pub const LINE_SHARE_URL: &str = "https://social-plugins.line.me/lineit/share";

/// Hashtags attached to every tweet.
pub const HASHTAGS: &str = "オンライン食事会,eshoku";

/// Public URL of a room page, e.g. `https://e-shoku.netlify.app/room/<id>`.
pub fn room_url(site_url: &url::Url, room_id: &str) -> String {
    format!("{}/room/{}", site_url.as_str().trim_end_matches('/'), room_id)
}

/// Page title, shared with the native share sheet.
pub fn page_title(room_name: &str) -> String {
    format!("{room_name} | {SITE_NAME}")
}

/// Percent-encode `pairs` into a query string. Everything but ASCII
/// alphanumerics is escaped, spaces included (`%20`, never `+`).
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Links for the two fixed social share targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub line: String,
}

impl ShareLinks {
    pub fn new(room_url: &str, share_text: &str) -> Self {
        let twitter = encode_query(&[
            ("url", room_url),
            ("text", share_text),
            ("hashtags", HASHTAGS),
        ]);
        let line = encode_query(&[("url", room_url), ("text", share_text)]);

        ShareLinks {
            twitter: format!("{TWITTER_SHARE_URL}?{twitter}"),
            line: format!("{LINE_SHARE_URL}?{line}"),
        }
    }

    pub fn get(&self, target: ShareTarget) -> Option<&str> {
        match target {
            ShareTarget::Twitter => Some(&self.twitter),
            ShareTarget::Line => Some(&self.line),
            ShareTarget::Native => None,
        }
    }
}

/// Where an invitation can be shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareTarget {
    Twitter,
    Line,
    Native,
}

impl ShareTarget {
    /// Targets to offer. The native share button only shows up when the
    /// runtime can actually open a share sheet.
    pub fn offered(native_available: bool) -> Vec<ShareTarget> {
        let mut targets = vec![ShareTarget::Twitter, ShareTarget::Line];
        if native_available {
            targets.push(ShareTarget::Native);
        }
        targets
    }
}

/// What gets handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeSharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Native sharing is not available")]
    Unavailable,

    #[error("Share was cancelled")]
    Cancelled,

    #[error("Share failed: {0}")]
    Failed(String),
}

/// A platform share sheet.
pub trait NativeShare {
    /// Whether this runtime can open a share sheet at all.
    fn is_available(&self) -> bool;

    fn share(&self, payload: &NativeSharePayload) -> Result<(), ShareError>;
}

/// Hand `payload` to the share sheet and forget about the outcome.
///
/// Failures, a cancelled sheet included, are logged at debug and dropped.
pub fn share_best_effort(sharer: &impl NativeShare, payload: &NativeSharePayload) {
    if let Err(e) = sharer.share(payload) {
        tracing::debug!(error = %e, url = %payload.url, "native share discarded");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_room_url_ignores_trailing_slash() {
        let id = "123e4567-e89b-12d3-a456-426614174000";
        let with_slash = url::Url::parse("https://e-shoku.netlify.app/").unwrap();
        let nested = url::Url::parse("https://example.com/eshoku/").unwrap();

        assert_eq!(
            room_url(&with_slash, id),
            format!("https://e-shoku.netlify.app/room/{id}")
        );
        assert_eq!(room_url(&nested, id), format!("https://example.com/eshoku/room/{id}"));
    }

    #[test]
    fn test_share_links_encode_text() {
        let links = ShareLinks::new(
            "https://e-shoku.netlify.app/room/abc",
            "Party & more に参加します!",
        );

        assert!(links.twitter.starts_with("https://twitter.com/share?url=https%3A%2F%2Fe%2Dshoku%2Enetlify%2Eapp%2Froom%2Fabc&text="));
        assert!(links.twitter.contains("Party%20%26%20more"));
        assert!(!links.twitter.contains('+'));
        assert!(links.twitter.ends_with("&hashtags=%E3%82%AA%E3%83%B3%E3%83%A9%E3%82%A4%E3%83%B3%E9%A3%9F%E4%BA%8B%E4%BC%9A%2Ceshoku"));
        assert!(links.line.starts_with("https://social-plugins.line.me/lineit/share?url="));
        assert!(!links.line.contains("hashtags"));
        assert!(!links.line.contains(' '));
    }

    #[test]
    fn test_encode_query_escapes_plus_and_space() {
        assert_eq!(encode_query(&[("text", "1+1 = 2")]), "text=1%2B1%20%3D%202");
        assert_eq!(encode_query(&[]), "");
    }

    #[test]
    fn test_native_target_offered_only_when_available() {
        assert_eq!(
            ShareTarget::offered(false),
            vec![ShareTarget::Twitter, ShareTarget::Line]
        );
        assert_eq!(ShareTarget::offered(true).last(), Some(&ShareTarget::Native));
    }

    struct CancelledSheet {
        calls: Cell<u32>,
    }

    impl NativeShare for CancelledSheet {
        fn is_available(&self) -> bool {
            true
        }

        fn share(&self, _payload: &NativeSharePayload) -> Result<(), ShareError> {
            self.calls.set(self.calls.get() + 1);
            Err(ShareError::Cancelled)
        }
    }

    #[test]
    fn test_best_effort_share_swallows_errors() {
        let sheet = CancelledSheet { calls: Cell::new(0) };
        let payload = NativeSharePayload {
            title: page_title("Hello World Party"),
            text: String::new(),
            url: "https://e-shoku.netlify.app/room/abc".to_string(),
        };

        share_best_effort(&sheet, &payload);

        assert_eq!(sheet.calls.get(), 1);
        assert_eq!(payload.title, "Hello World Party | e-Shoku");
    }
}
