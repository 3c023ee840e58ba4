//! Batch submission to the processing service.
//!
//! Sends every selected document in one multipart request to
//! `/api/process` and hands the returned archive to a [`Downloader`].

use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::download::Downloader;
use crate::config::{process_url, DOWNLOAD_FILENAME, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, BatchOutcome, UploadPart};

/// Zip local file header magic.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// Zip end-of-central-directory magic, what an empty archive starts with.
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";

/// Remote side of a batch submission.
#[allow(async_fn_in_trait)]
pub trait ProcessingClient {
    /// File handle type carried by the upload parts.
    type Payload;

    /// Upload all parts in one request and return the response body.
    async fn process(&self, parts: &[UploadPart<Self::Payload>]) -> AppResult<Vec<u8>>;
}

/// Map an HTTP status to the batch result.
pub fn check_status(status: u16) -> AppResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AppError::Server { status })
    }
}

/// Whether the bytes start like a zip archive.
pub fn looks_like_zip(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC) || bytes.starts_with(ZIP_EMPTY_MAGIC)
}

/// Submit a batch and deliver the archive.
///
/// Every failure is folded into [`BatchOutcome::Failed`], so the caller can
/// always resolve the controller state with the returned value.
pub async fn submit_batch<C, D>(
    client: &C,
    downloader: &D,
    parts: Vec<UploadPart<C::Payload>>,
) -> BatchOutcome
where
    C: ProcessingClient,
    D: Downloader,
{
    log::info!("📤 Submitting {} file(s) for processing", parts.len());

    let result = async {
        let archive = client.process(&parts).await?;
        if !looks_like_zip(&archive) {
            log::warn!("⚠️ Response body ({} bytes) is not a zip archive", archive.len());
        }
        downloader.save(&archive, DOWNLOAD_FILENAME)
    }
    .await;

    match result {
        Ok(()) => {
            log::info!("✅ Batch processed, {} downloaded", DOWNLOAD_FILENAME);
            BatchOutcome::Delivered
        }
        Err(e) => {
            log::error!("❌ Batch failed: {}", e);
            BatchOutcome::Failed(e)
        }
    }
}

/// [`ProcessingClient`] talking to the real endpoint through `fetch`.
#[derive(Clone, Debug)]
pub struct HttpProcessingClient {
    url: String,
}

impl HttpProcessingClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpProcessingClient {
    fn default() -> Self {
        Self::new(process_url())
    }
}

impl ProcessingClient for HttpProcessingClient {
    type Payload = File;

    async fn process(&self, parts: &[UploadPart<File>]) -> AppResult<Vec<u8>> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        for part in parts {
            form_data
                .append_with_blob_and_filename(UPLOAD_FIELD, &part.payload, &part.file_name)
                .map_err(|e| {
                    AppError::Transport(format!("Failed to append {}: {:?}", part.file_name, e))
                })?;
        }

        let request = Request::post(&self.url)
            .body(form_data)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        log::debug!("POST {} -> {}", self.url, response.status());
        check_status(response.status())?;

        response
            .binary()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))
    }
}
