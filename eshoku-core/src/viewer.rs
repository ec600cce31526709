//! The user looking at a room page.

use serde::{Deserialize, Serialize};

/// An authenticated viewer. Anonymous viewers are `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: String,
}

impl Viewer {
    pub fn new(id: impl Into<String>) -> Self {
        Viewer { id: id.into() }
    }

    /// Build a viewer from an identity value handed over by the identity
    /// provider. Blank values mean nobody is signed in.
    pub fn from_identity(value: Option<&str>) -> Option<Self> {
        let id = value?.trim();
        if id.is_empty() {
            None
        } else {
            Some(Viewer::new(id))
        }
    }
}
