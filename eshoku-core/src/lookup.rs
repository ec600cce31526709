//! Fetch a room from the room service and classify what went wrong.

use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::error::{LookupError, NotFoundCause};
use crate::room::RoomRecord;
use crate::room_id::RoomId;

/// Client for `GET /rooms/{id}/` on the room service.
///
/// One request per lookup, no retries; timeouts are whatever the
/// underlying `reqwest::Client` was built with.
#[derive(Debug, Clone)]
pub struct RoomLookup {
    http: reqwest::Client,
    base_url: Url,
}

impl RoomLookup {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        RoomLookup { http, base_url }
    }

    fn room_endpoint(&self, id: &RoomId) -> String {
        format!("{}/rooms/{}/", self.base_url.as_str().trim_end_matches('/'), id)
    }

    /// Look up a room by id.
    ///
    /// Ids without the canonical UUID layout are rejected as not found
    /// before any request goes out.
    #[tracing::instrument(name = "room_lookup", skip(self))]
    pub async fn lookup(&self, id: &str) -> Result<RoomRecord, LookupError> {
        let Ok(room_id) = id.parse::<RoomId>() else {
            debug!("rejected malformed room id");
            return Err(LookupError::NotFound(NotFoundCause::MalformedIdentifier));
        };

        let resp = self
            .http
            .get(self.room_endpoint(&room_id))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "room service unreachable");
                LookupError::ServerError(e)
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            debug!("room service has no such room");
            return Err(LookupError::NotFound(NotFoundCause::Remote));
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "room service returned an error");
            return Err(LookupError::RemoteError(status.as_u16()));
        }

        let room = resp.json::<RoomRecord>().await.map_err(|e| {
            warn!(error = %e, "room service sent an unreadable room");
            LookupError::ServerError(e)
        })?;

        debug!(room_name = %room.room_name, "room fetched");
        Ok(room)
    }
}
