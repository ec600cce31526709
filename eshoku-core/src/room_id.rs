//! Room identifiers.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Length of the hyphenated 8-4-4-4-12 layout.
const HYPHENATED_LEN: usize = 36;

/// A room id that has the canonical UUID layout.
///
/// The original spelling is kept so the id round-trips into URLs exactly
/// as the room service issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomId(String);

/// The string is not an 8-4-4-4-12 hexadecimal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRoomId;

impl fmt::Display for MalformedRoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room id must be a hyphenated UUID")
    }
}

impl std::error::Error for MalformedRoomId {}

/// Check the 8-4-4-4-12 hex layout, case-insensitively.
///
/// `Uuid::try_parse` also accepts the simple, braced and urn forms, which
/// all have other lengths, so pinning the length leaves only the
/// hyphenated one.
pub fn is_room_id(s: &str) -> bool {
    s.len() == HYPHENATED_LEN && Uuid::try_parse(s).is_ok()
}

impl FromStr for RoomId {
    type Err = MalformedRoomId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_room_id(s) {
            Ok(RoomId(s.to_string()))
        } else {
            Err(MalformedRoomId)
        }
    }
}

impl RoomId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
