//! Resolve which single action a viewer may take on a room.
//!
//! The room page shows exactly one primary button. Which one depends only
//! on the room's membership lists and on who is looking, so it is
//! recomputed from scratch for every page view.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::room::{Member, RoomRecord};
use crate::viewer::Viewer;

/// Descriptions longer than this are cut for share text.
pub const SHARE_TEXT_LIMIT: usize = 15;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionState {
    /// Signed in, neither guest nor host.
    CanJoin,
    /// Signed in and already a guest.
    CanCancel,
    /// Signed in and hosting.
    CanEdit,
    /// Nobody signed in, or membership unknown.
    Disabled,
}

/// The resolved action together with the share text that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub state: ActionState,
    pub share_text: String,
}

/// Resolve the viewer's action on `room`. First match wins:
///
/// 1. no viewer, or guests/hosts missing: `Disabled`
/// 2. viewer is a guest: `CanCancel`
/// 3. viewer is a host: `CanEdit`
/// 4. otherwise: `CanJoin`
///
/// A viewer who is both guest and host therefore gets `CanCancel`.
// TODO: confirm guest-over-host precedence with product.
pub fn resolve(room: &RoomRecord, viewer: Option<&Viewer>) -> Resolution {
    let (Some(viewer), Some(guests), Some(hosts)) = (viewer, &room.guests, &room.hosts) else {
        return Resolution {
            state: ActionState::Disabled,
            share_text: String::new(),
        };
    };

    if member_ids(guests).contains(viewer.id.as_str()) {
        Resolution {
            state: ActionState::CanCancel,
            share_text: format!("{} に参加します!", room.room_name),
        }
    } else if member_ids(hosts).contains(viewer.id.as_str()) {
        Resolution {
            state: ActionState::CanEdit,
            share_text: format!("{} に参加しませんか?", room.room_name),
        }
    } else {
        Resolution {
            state: ActionState::CanJoin,
            share_text: truncate_description(&room.description),
        }
    }
}

fn member_ids(members: &[Member]) -> HashSet<&str> {
    members.iter().map(|m| m.id.as_str()).collect()
}

/// First `SHARE_TEXT_LIMIT` UTF-16 code units, with `...` only if the
/// description is longer than that.
///
/// A character that would straddle the limit is dropped whole.
pub fn truncate_description(description: &str) -> String {
    if description.encode_utf16().count() <= SHARE_TEXT_LIMIT {
        return description.to_string();
    }

    let mut units = 0;
    let mut cut = 0;
    for (i, c) in description.char_indices() {
        units += c.len_utf16();
        if units > SHARE_TEXT_LIMIT {
            break;
        }
        cut = i + c.len_utf8();
    }

    format!("{}{}", &description[..cut], ELLIPSIS)
}

/// How the room page exposes the resolved action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Affordance {
    /// Navigates to another page (join form, edit form).
    Link { label: String, href: String },
    /// Calls the room service directly on click.
    RoomAction {
        label: String,
        mode: RoomActionMode,
        room_id: String,
        disabled: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomActionMode {
    Join,
    Leave,
}

impl ActionState {
    pub fn affordance(self, room_id: &str) -> Affordance {
        match self {
            ActionState::CanJoin => Affordance::Link {
                label: "参加する".to_string(),
                href: format!("join/{room_id}"),
            },
            ActionState::CanCancel => Affordance::RoomAction {
                label: "キャンセルする".to_string(),
                mode: RoomActionMode::Leave,
                room_id: room_id.to_string(),
                disabled: false,
            },
            ActionState::CanEdit => Affordance::Link {
                label: "編集する".to_string(),
                href: format!("edit/{room_id}"),
            },
            ActionState::Disabled => Affordance::RoomAction {
                label: "ログインが必要です".to_string(),
                mode: RoomActionMode::Join,
                room_id: room_id.to_string(),
                disabled: true,
            },
        }
    }
}

impl Affordance {
    pub fn label(&self) -> &str {
        match self {
            Affordance::Link { label, .. } | Affordance::RoomAction { label, .. } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            username: format!("user-{id}"),
        }
    }

    fn room(guests: Option<Vec<Member>>, hosts: Option<Vec<Member>>) -> RoomRecord {
        RoomRecord {
            id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
            room_name: "Hello World Party".to_string(),
            description: "オンラインで一緒に晩ごはんを食べましょう".to_string(),
            datetime: DateTime::parse_from_rfc3339("2021-08-21T19:00:00+09:00").unwrap(),
            capacity: 8,
            guests_count: guests.as_ref().map_or(0, |g| g.len() as u32),
            guests,
            hosts,
        }
    }

    #[test]
    fn test_anonymous_viewer_is_disabled() {
        let room = room(Some(vec![member("a")]), Some(vec![member("b")]));
        let resolution = resolve(&room, None);

        assert_eq!(resolution.state, ActionState::Disabled);
        assert_eq!(resolution.share_text, "");
    }

    #[test]
    fn test_missing_membership_is_disabled() {
        let viewer = Viewer::new("a");

        let no_guests = room(None, Some(vec![member("a")]));
        assert_eq!(resolve(&no_guests, Some(&viewer)).state, ActionState::Disabled);

        let no_hosts = room(Some(vec![member("a")]), None);
        let resolution = resolve(&no_hosts, Some(&viewer));
        assert_eq!(resolution.state, ActionState::Disabled);
        assert_eq!(resolution.share_text, "");
    }

    #[test]
    fn test_guest_can_cancel() {
        let room = room(Some(vec![member("x"), member("a")]), Some(vec![member("h")]));
        let resolution = resolve(&room, Some(&Viewer::new("a")));

        assert_eq!(resolution.state, ActionState::CanCancel);
        assert_eq!(resolution.share_text, "Hello World Party に参加します!");
    }

    #[test]
    fn test_host_can_edit() {
        let room = room(Some(vec![member("x")]), Some(vec![member("a")]));
        let resolution = resolve(&room, Some(&Viewer::new("a")));

        assert_eq!(resolution.state, ActionState::CanEdit);
        assert_eq!(resolution.share_text, "Hello World Party に参加しませんか?");
    }

    #[test]
    fn test_guest_wins_over_host() {
        let room = room(Some(vec![member("a")]), Some(vec![member("a")]));
        let resolution = resolve(&room, Some(&Viewer::new("a")));

        assert_eq!(resolution.state, ActionState::CanCancel);
    }

    #[test]
    fn test_stranger_can_join_with_truncated_description() {
        let room = room(Some(vec![member("x")]), Some(vec![member("h")]));
        let resolution = resolve(&room, Some(&Viewer::new("a")));

        assert_eq!(resolution.state, ActionState::CanJoin);
        assert_eq!(resolution.share_text, "オンラインで一緒に晩ごはんを食...");
    }

    #[test]
    fn test_empty_lists_still_resolve_for_signed_in_viewer() {
        let room = room(Some(vec![]), Some(vec![]));
        assert_eq!(resolve(&room, Some(&Viewer::new("a"))).state, ActionState::CanJoin);
    }

    #[test]
    fn test_truncate_description_boundaries() {
        assert_eq!(truncate_description("abcdefghijklmnopqrst"), "abcdefghijklmno...");
        assert_eq!(truncate_description("abcdefghij"), "abcdefghij");
        assert_eq!(truncate_description("abcdefghijklmno"), "abcdefghijklmno");
        assert_eq!(truncate_description(""), "");
    }

    #[test]
    fn test_truncate_description_counts_utf16_units() {
        // Eight two-unit emoji: 16 units, one over the limit.
        assert_eq!(truncate_description("🍣🍣🍣🍣🍣🍣🍣🍣"), "🍣🍣🍣🍣🍣🍣🍣...");
        // Seven emoji plus one ASCII char: exactly 15 units.
        assert_eq!(truncate_description("🍣🍣🍣🍣🍣🍣🍣a"), "🍣🍣🍣🍣🍣🍣🍣a");
        // The emoji would end at unit 16, so it is dropped whole.
        assert_eq!(truncate_description("abcdefghijklmn🍣"), "abcdefghijklmn...");
    }

    #[test]
    fn test_affordance_per_state() {
        let id = "123e4567-e89b-12d3-a456-426614174000";

        assert_eq!(
            ActionState::CanJoin.affordance(id),
            Affordance::Link {
                label: "参加する".to_string(),
                href: format!("join/{id}"),
            }
        );
        assert_eq!(
            ActionState::CanEdit.affordance(id),
            Affordance::Link {
                label: "編集する".to_string(),
                href: format!("edit/{id}"),
            }
        );
        assert!(matches!(
            ActionState::CanCancel.affordance(id),
            Affordance::RoomAction { mode: RoomActionMode::Leave, disabled: false, .. }
        ));
        assert!(matches!(
            ActionState::Disabled.affordance(id),
            Affordance::RoomAction { mode: RoomActionMode::Join, disabled: true, .. }
        ));
    }
}
