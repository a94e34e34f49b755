use serde::Deserialize;

use crate::error::Error;

/// One legend record from `GET /legend/all`. The endpoint returns more
/// fields than this; only the ones the fetcher needs are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct LegendMeta {
    pub legend_id: u32,
    pub legend_name_key: String,
    #[serde(default)]
    pub bio_name: String,
}

pub async fn fetch_all_legends(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
) -> Result<Vec<LegendMeta>, Error> {
    let legends = client
        .get(format!("{api_url}/legend/all"))
        .query(&[("api_key", api_key)])
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<LegendMeta>>()
        .await?;

    tracing::info!(count = legends.len(), "fetched legend metadata from api");

    Ok(legends)
}
