//! The room page view model.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::action::{ActionState, Affordance, resolve};
use crate::room::RoomRecord;
use crate::share::{self, NativeSharePayload, ShareLinks, ShareTarget};
use crate::viewer::Viewer;

/// Everything a view needs to render one room page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPage {
    pub room: RoomRecord,
    pub action: ActionState,
    pub share_text: String,
    pub affordance: Affordance,
    pub title: String,
    pub meta_description: String,
    pub og_description: String,
    pub schedule: String,
    pub attendance: String,
    pub room_url: String,
    pub share_links: ShareLinks,
    pub share_targets: Vec<ShareTarget>,
    pub native_share: NativeSharePayload,
}

impl RoomPage {
    pub fn build(
        room: &RoomRecord,
        viewer: Option<&Viewer>,
        site_url: &Url,
        native_share_available: bool,
    ) -> Self {
        let resolution = resolve(room, viewer);
        let room_url = share::room_url(site_url, &room.id);
        let title = share::page_title(&room.room_name);

        RoomPage {
            affordance: resolution.state.affordance(&room.id),
            action: resolution.state,
            meta_description: room.description.clone(),
            og_description: resolution.share_text.clone(),
            schedule: room.schedule_label(),
            attendance: room.attendance_label(),
            share_links: ShareLinks::new(&room_url, &resolution.share_text),
            share_targets: ShareTarget::offered(native_share_available),
            native_share: NativeSharePayload {
                title: title.clone(),
                text: resolution.share_text.clone(),
                url: room_url.clone(),
            },
            share_text: resolution.share_text,
            title,
            room_url,
            room: room.clone(),
        }
    }
}
