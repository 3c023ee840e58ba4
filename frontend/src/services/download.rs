//! Save-as of the processed archive.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::config::ARCHIVE_MIME_TYPE;
use crate::types::{AppError, AppResult};

/// Platform file-save mechanism.
pub trait Downloader {
    /// Offer `archive` to the user as a file named `file_name`.
    fn save(&self, archive: &[u8], file_name: &str) -> AppResult<()>;
}

/// Object URL revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> AppResult<Self> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|e| js_error("Failed to create object URL", e))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {:?}", e);
        }
    }
}

/// [`Downloader`] that clicks a temporary `<a download>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownloader;

impl Downloader for BrowserDownloader {
    fn save(&self, archive: &[u8], file_name: &str) -> AppResult<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| AppError::Transport("No document available".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| AppError::Transport("Document has no body".to_string()))?;

        let bytes = js_sys::Uint8Array::from(archive);
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(ARCHIVE_MIME_TYPE);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("Failed to create blob", e))?;

        let url = ObjectUrl::for_blob(&blob)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_error("Failed to create link", e))?
            .dyn_into()
            .map_err(|_| AppError::Transport("Created element is not a link".to_string()))?;
        anchor.set_href(&url.0);
        anchor.set_download(file_name);

        body.append_child(&anchor)
            .map_err(|e| js_error("Failed to attach link", e))?;
        anchor.click();
        anchor.remove();

        log::info!("💾 Download of {} triggered ({} bytes)", file_name, archive.len());
        Ok(())
    }
}

fn js_error(context: &str, error: wasm_bindgen::JsValue) -> AppError {
    AppError::Transport(format!("{}: {:?}", context, error))
}
