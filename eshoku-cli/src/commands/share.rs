use anyhow::{Context, Result};
use clap::ValueEnum;
use eshoku_core::share::share_best_effort;
use eshoku_core::{EshokuConfig, NativeShare, ShareTarget};
use owo_colors::OwoColorize;

use crate::commands::fetch_page;
use crate::native::MailShare;

/// Share target selectable on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Via {
    Twitter,
    Line,
    Native,
}

impl From<Via> for ShareTarget {
    fn from(via: Via) -> Self {
        match via {
            Via::Twitter => ShareTarget::Twitter,
            Via::Line => ShareTarget::Line,
            Via::Native => ShareTarget::Native,
        }
    }
}

pub async fn run(
    config: &EshokuConfig,
    id: &str,
    viewer: Option<&str>,
    via: Option<Via>,
) -> Result<()> {
    let sharer = MailShare;
    let page = fetch_page(config, id, viewer, sharer.is_available()).await?;

    let Some(via) = via else {
        println!("{} {}", "Twitter".bold(), page.share_links.twitter);
        println!("{} {}", "LINE".bold(), page.share_links.line);
        if page.share_targets.contains(&ShareTarget::Native) {
            println!("{}", "(native share available with --via native)".dimmed());
        }
        return Ok(());
    };

    let target = ShareTarget::from(via);
    if !page.share_targets.contains(&target) {
        anyhow::bail!("Sharing via {:?} is not available here", via);
    }

    match page.share_links.get(target) {
        Some(link) => {
            open::that(link).with_context(|| format!("Failed to open {link}"))?;
        }
        None => share_best_effort(&sharer, &page.native_share),
    }

    Ok(())
}
