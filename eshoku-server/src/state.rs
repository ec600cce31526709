use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderMap, HeaderName};
use eshoku_core::{EshokuConfig, RoomLookup, Viewer};
use url::Url;

/// Shared application state. Read-only once built.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    lookup: RoomLookup,
    site_url: Url,
    viewer_header: HeaderName,
}

impl AppState {
    pub fn new(config: &EshokuConfig) -> Result<Self> {
        let viewer_header = HeaderName::from_bytes(config.viewer_header.as_bytes())
            .with_context(|| format!("Invalid viewer header '{}'", config.viewer_header))?;

        Ok(AppState {
            inner: Arc::new(Inner {
                lookup: RoomLookup::new(config.api_base_url.clone()),
                site_url: config.site_url.clone(),
                viewer_header,
            }),
        })
    }

    pub fn lookup(&self) -> &RoomLookup {
        &self.inner.lookup
    }

    pub fn site_url(&self) -> &Url {
        &self.inner.site_url
    }

    /// The signed-in user, as vouched for by the identity proxy.
    pub fn viewer(&self, headers: &HeaderMap) -> Option<Viewer> {
        let value = headers
            .get(&self.inner.viewer_header)
            .and_then(|v| v.to_str().ok());
        Viewer::from_identity(value)
    }
}
