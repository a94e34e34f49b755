use std::path::Path;

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::error::Error;

/// Stream `url` to `dest`, creating parent directories as needed.
///
/// A destination that already exists is a no-op and costs no request, which
/// is what makes an aborted run safe to re-run. Returns whether anything was
/// actually downloaded.
pub async fn download_if_absent(
    client: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<bool, Error> {
    if dest.exists() {
        tracing::debug!(path = %dest.display(), "already downloaded, skipping");
        return Ok(false);
    }

    let response = client.get(url).send().await?.error_for_status()?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(Error::io(parent))?;
    }

    let mut file = tokio::fs::File::create(dest).await.map_err(Error::io(dest))?;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await.map_err(Error::io(dest))?;
    }

    file.flush().await.map_err(Error::io(dest))?;

    tracing::debug!(url, path = %dest.display(), "downloaded");

    Ok(true)
}
