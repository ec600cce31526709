//! Core types for the e-Shoku room page.
//!
//! This crate provides what both eshoku-server and eshoku-cli need:
//! - `lookup` fetches a room from the room service and classifies failures
//! - `action` resolves which single action the viewer may take on a room
//! - `share` builds the outbound share links and the native share payload
//! - `page` bundles all of the above into the room page view model

pub mod action;
pub mod config;
pub mod error;
pub mod lookup;
pub mod page;
pub mod room;
pub mod room_id;
pub mod share;
pub mod viewer;

pub use action::{ActionState, Affordance, Resolution, RoomActionMode, resolve};
pub use config::EshokuConfig;
pub use error::{EshokuError, EshokuResult, LookupError, NotFoundCause};
pub use lookup::RoomLookup;
pub use page::RoomPage;
pub use room::{Member, RoomRecord};
pub use room_id::RoomId;
pub use share::{NativeShare, NativeSharePayload, ShareLinks, ShareTarget};
pub use viewer::Viewer;
