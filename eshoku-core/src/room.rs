//! Room records as served by the room service.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A user listed on a room, either as host or as guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub username: String,
}

/// One scheduled gathering.
///
/// Immutable for the lifetime of a page view; joining or leaving goes
/// through the room service and is followed by a fresh lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    pub room_name: String,
    pub description: String,
    pub datetime: DateTime<FixedOffset>,
    pub capacity: u32,
    pub guests_count: u32,

    /// Missing when the room service withholds membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<Vec<Member>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<Member>>,
}

impl RoomRecord {
    /// Start time as shown on the page, e.g. `2021/08/21 19:00~`.
    pub fn schedule_label(&self) -> String {
        format!("{}~", self.datetime.format("%Y/%m/%d %H:%M"))
    }

    /// Participant count line, e.g. `3/8人`.
    pub fn attendance_label(&self) -> String {
        format!("{}/{}人", self.guests_count, self.capacity)
    }

    pub fn hosts(&self) -> &[Member] {
        self.hosts.as_deref().unwrap_or_default()
    }
}
