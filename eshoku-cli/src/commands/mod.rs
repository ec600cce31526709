pub mod room;
pub mod share;

use anyhow::{Context, Result};
use eshoku_core::{EshokuConfig, RoomLookup, RoomPage, Viewer};

/// Fetch a room and resolve its page for `viewer`.
pub async fn fetch_page(
    config: &EshokuConfig,
    id: &str,
    viewer: Option<&str>,
    native_share_available: bool,
) -> Result<RoomPage> {
    let lookup = RoomLookup::new(config.api_base_url.clone());
    let room = match lookup.lookup(id).await {
        Ok(room) => room,
        Err(e) if e.is_not_found() => anyhow::bail!("No room with id '{id}'"),
        Err(e) => return Err(e).with_context(|| format!("Could not load room '{id}'")),
    };

    let viewer = Viewer::from_identity(viewer);
    Ok(RoomPage::build(
        &room,
        viewer.as_ref(),
        &config.site_url,
        native_share_available,
    ))
}
