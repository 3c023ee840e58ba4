//! Application configuration.
//!
//! Centralized configuration for the DOCX Processor frontend.
//! Everything is fixed at compile time; only the API origin can be
//! overridden, through `DOCX_PROCESSOR_API_URL` at build time.

/// Application name, used for the page title and hero heading.
pub const APP_NAME: &str = "DOCX Processor";

/// Base URL of the processing service.
///
/// Empty by default so requests stay same-origin (`/api/process`).
pub const API_BASE_URL: &str = match option_env!("DOCX_PROCESSOR_API_URL") {
    Some(url) => url,
    None => "",
};

/// Path of the batch processing endpoint.
pub const PROCESS_PATH: &str = "/api/process";

/// Multipart field name, repeated once per uploaded document.
pub const UPLOAD_FIELD: &str = "files";

/// Name of the archive saved on the user's device.
pub const DOWNLOAD_FILENAME: &str = "processed_files.zip";

/// MIME type of Word documents accepted by the drop zone.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// File extension accepted by the drop zone.
pub const DOCX_EXTENSION: &str = ".docx";

/// MIME type given to the downloaded archive blob.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// Full URL of the processing endpoint.
pub fn process_url() -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), PROCESS_PATH)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    format!("{},{}", DOCX_EXTENSION, DOCX_MIME_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_url_ends_with_endpoint() {
        assert!(process_url().ends_with("/api/process"));
        assert!(!process_url().contains("//api"));
    }

    #[test]
    fn test_accept_attribute_lists_extension_and_mime() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".docx,"));
        assert!(accept.ends_with(DOCX_MIME_TYPE));
    }
}
