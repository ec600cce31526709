//! Native sharing for the terminal: hand the invitation to the desktop
//! mail handler.

use eshoku_core::NativeSharePayload;
use eshoku_core::share::{NativeShare, ShareError, encode_query};

pub struct MailShare;

impl MailShare {
    fn mailto(payload: &NativeSharePayload) -> String {
        let body = if payload.text.is_empty() {
            payload.url.clone()
        } else {
            format!("{}\n{}", payload.text, payload.url)
        };

        let query = encode_query(&[("subject", payload.title.as_str()), ("body", body.as_str())]);

        format!("mailto:?{query}")
    }
}

impl NativeShare for MailShare {
    fn is_available(&self) -> bool {
        cfg!(any(target_os = "macos", target_os = "windows"))
            || std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some()
    }

    fn share(&self, payload: &NativeSharePayload) -> Result<(), ShareError> {
        if !self.is_available() {
            return Err(ShareError::Unavailable);
        }

        open::that(Self::mailto(payload)).map_err(|e| ShareError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_percent_encodes_spaces() {
        let payload = NativeSharePayload {
            title: "Hello World Party | e-Shoku".to_string(),
            text: "1+1 に参加します!".to_string(),
            url: "https://e-shoku.netlify.app/room/abc".to_string(),
        };

        let mailto = MailShare::mailto(&payload);

        assert!(mailto.starts_with("mailto:?subject=Hello%20World%20Party%20%7C%20e%2DShoku&body="));
        assert!(mailto.contains("1%2B1%20"));
        assert!(mailto.ends_with("%0Ahttps%3A%2F%2Fe%2Dshoku%2Enetlify%2Eapp%2Froom%2Fabc"));
        assert!(!mailto.contains('+'));
    }

    #[test]
    fn test_mailto_without_text_only_carries_url() {
        let payload = NativeSharePayload {
            title: "t".to_string(),
            text: String::new(),
            url: "https://e-shoku.netlify.app/room/abc".to_string(),
        };

        assert!(MailShare::mailto(&payload).ends_with("body=https%3A%2F%2Fe%2Dshoku%2Enetlify%2Eapp%2Froom%2Fabc"));
    }
}
