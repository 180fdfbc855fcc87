//! One-time startup provisioning of the similarity matrix file.
//!
//! The matrix is too large to ship in the repository, so a missing local
//! copy is recovered from a gzip-compressed sibling file or downloaded from
//! a remote file host. Hosts of large files answer the first request with a
//! warning page and a `download_warning*` cookie; the request must be
//! replayed with that token as a `confirm` parameter to receive the actual
//! bytes.

use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Makes sure the similarity matrix exists at `config.similarity_path`.
///
/// No-op when the file is already present. No retries: a failed download
/// leaves no file behind and the subsequent dataset load fails fatally.
pub async fn ensure_similarity_file(config: &Config) -> AppResult<()> {
    if Path::new(&config.similarity_path).exists() {
        tracing::debug!(path = %config.similarity_path, "Similarity matrix already present");
        return Ok(());
    }

    if Path::new(&config.similarity_gz_path).exists() {
        tracing::info!(
            from = %config.similarity_gz_path,
            to = %config.similarity_path,
            "Decompressing local similarity matrix"
        );
        return decompress_gz(&config.similarity_gz_path, &config.similarity_path).await;
    }

    tracing::info!(
        url = %config.drive_url,
        file_id = %config.similarity_file_id,
        "Downloading similarity matrix"
    );
    download_from_drive(
        &config.drive_url,
        &config.similarity_file_id,
        &config.similarity_path,
    )
    .await
}

/// Gzip-decompresses `source` into `destination` on a blocking thread
async fn decompress_gz(source: &str, destination: &str) -> AppResult<()> {
    let source = source.to_string();
    let destination = destination.to_string();

    tokio::task::spawn_blocking(move || -> AppResult<()> {
        let input = std::fs::File::open(&source)?;
        let mut decoder = flate2::read::GzDecoder::new(std::io::BufReader::new(input));
        let mut output = std::fs::File::create(&destination)?;
        std::io::copy(&mut decoder, &mut output)?;
        Ok(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}

/// Fetches a file from a Google-Drive-style host, handling the large-file
/// confirmation-token handshake, and streams it to `destination` in chunks.
async fn download_from_drive(drive_url: &str, file_id: &str, destination: &str) -> AppResult<()> {
    let client = reqwest::Client::new();

    let response = client
        .get(drive_url)
        .query(&[("id", file_id)])
        .send()
        .await?;

    let token = confirm_token(&response);

    let response = match token {
        Some(token) => {
            tracing::debug!("Replaying download request with confirmation token");
            client
                .get(drive_url)
                .query(&[("id", file_id), ("confirm", token.as_str())])
                .send()
                .await?
        }
        None => response,
    };

    if !response.status().is_success() {
        return Err(AppError::ExternalApi(format!(
            "similarity matrix download failed with status {}",
            response.status()
        )));
    }

    save_response_content(response, destination).await
}

/// Extracts the large-file warning token from the response cookies
fn confirm_token(response: &reqwest::Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name().starts_with("download_warning"))
        .map(|cookie| cookie.value().to_string())
}

/// Streams the response body to disk chunk by chunk, then moves the finished
/// file into place so an interrupted download leaves nothing behind
async fn save_response_content(mut response: reqwest::Response, destination: &str) -> AppResult<()> {
    let partial_path = format!("{}.part", destination);
    let mut file = tokio::fs::File::create(&partial_path).await?;

    let result: AppResult<()> = async {
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
    .await;

    if let Err(e) = result {
        let _ = tokio::fs::remove_file(&partial_path).await;
        return Err(e);
    }

    tokio::fs::rename(&partial_path, destination).await?;
    tracing::info!(path = %destination, "Similarity matrix downloaded");
    Ok(())
}
