use anyhow::Result;
use eshoku_core::{EshokuConfig, NativeShare};

use crate::commands::fetch_page;
use crate::native::MailShare;
use crate::render::Render;

pub async fn run(config: &EshokuConfig, id: &str, viewer: Option<&str>, json: bool) -> Result<()> {
    let page = fetch_page(config, id, viewer, MailShare.is_available()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", page.render());
    }

    Ok(())
}
