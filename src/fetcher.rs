use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{self, LegendMeta};
use crate::config::Config;
use crate::download::download_if_absent;
use crate::error::Error;
use crate::site::{self, LegendLink};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One legend's worth of work: where its artwork lives remotely and where it
/// lands locally. Recomputed every run, never persisted.
#[derive(Debug)]
pub struct DownloadTarget {
    pub name_key: String,
    pub page_url: String,
    pub thumbnail_url: String,
    pub mini_path: PathBuf,
    pub full_path: PathBuf,
}

/// Pair the API list with the listing-page anchors by position.
///
/// The two sources are ordered independently and nothing ties a record to an
/// anchor, so a count mismatch is worth shouting about before truncating to
/// the shorter list.
pub fn pair_targets(
    metas: &[LegendMeta],
    links: &[LegendLink],
    site_url: &str,
    output_dir: &Path,
) -> Vec<DownloadTarget> {
    if metas.len() != links.len() {
        tracing::warn!(
            api = metas.len(),
            site = links.len(),
            "api and listing page disagree on legend count, pairing by position"
        );
    }

    metas
        .iter()
        .zip(links)
        .map(|(meta, link)| {
            let filename = format!("{}.png", meta.legend_name_key);

            DownloadTarget {
                name_key: meta.legend_name_key.clone(),
                page_url: format!("{site_url}{}", link.href),
                thumbnail_url: link.thumbnail.clone(),
                mini_path: output_dir.join("mini").join(&filename),
                full_path: output_dir.join("full").join(filename),
            }
        })
        .collect()
}

/// Fetch a legend's full splash image unless it is already on disk.
pub async fn scrape_full_image(
    client: &reqwest::Client,
    page_url: &str,
    dest: &Path,
) -> Result<bool, Error> {
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "splash already present, skipping");
        return Ok(false);
    }

    let html = client
        .get(page_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let splash_url = site::parse_splash_url(&html, page_url)?;

    download_if_absent(client, &splash_url, dest).await
}

pub async fn run(config: &Config) -> Result<(), Error> {
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let metas = api::fetch_all_legends(&client, &config.api_url, &config.api_key).await?;
    let links = site::fetch_legend_links(&client, &config.site_url).await?;

    let targets = pair_targets(
        &metas,
        &links,
        &config.site_url,
        Path::new(&config.output_dir),
    );

    let mut downloaded = 0usize;
    let mut skipped = 0usize;

    for target in &targets {
        tracing::debug!(legend = %target.name_key, "processing");

        if scrape_full_image(&client, &target.page_url, &target.full_path).await? {
            downloaded += 1;
        } else {
            skipped += 1;
        }

        if download_if_absent(&client, &target.thumbnail_url, &target.mini_path).await? {
            downloaded += 1;
        } else {
            skipped += 1;
        }
    }

    tracing::info!(
        legends = targets.len(),
        downloaded,
        skipped,
        "artwork fetch complete"
    );

    Ok(())
}
