//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Entry Types** - Selected files and their batch status
//! - **Display Types** - Status indicators for the file list
//! - **Error Types** - Batch failure kinds

use thiserror::Error;

use crate::config::{DOCX_EXTENSION, DOCX_MIME_TYPE};

// =============================================================================
// Entry Types
// =============================================================================

/// Lifecycle state of an entry within one processing cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileStatus {
    /// Selected, not yet submitted
    Pending,
    /// Part of the batch currently in flight
    Processing,
    /// Batch delivered
    Success,
    /// Batch failed
    Error,
}

impl FileStatus {
    /// Indicator shown next to the file name.
    pub fn indicator(&self) -> StatusIndicator {
        match self {
            FileStatus::Pending => StatusIndicator::Idle,
            FileStatus::Processing => StatusIndicator::Spinner,
            FileStatus::Success => StatusIndicator::SuccessMark,
            FileStatus::Error => StatusIndicator::FailureMark,
        }
    }
}

/// A file handed over by the drop zone or the file picker.
///
/// `P` is the payload handle: `web_sys::File` in the browser.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<P> {
    /// Original file name
    pub name: String,
    /// Raw file content
    pub payload: P,
}

impl<P> SelectedFile<P> {
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self { name: name.into(), payload }
    }
}

/// One selected file tracked through the UI lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry<P> {
    name: String,
    status: FileStatus,
    error_message: Option<String>,
    payload: P,
}

impl<P> FileEntry<P> {
    /// Fresh pending entry for a selected file.
    pub fn pending(file: SelectedFile<P>) -> Self {
        Self {
            name: file.name,
            status: FileStatus::Pending,
            error_message: None,
            payload: file.payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> FileStatus {
        self.status
    }

    /// Present only when the status is [`FileStatus::Error`].
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub(crate) fn mark_processing(&mut self) {
        self.status = FileStatus::Processing;
        self.error_message = None;
    }

    pub(crate) fn mark_success(&mut self) {
        self.status = FileStatus::Success;
        self.error_message = None;
    }

    pub(crate) fn mark_error(&mut self, message: &str) {
        self.status = FileStatus::Error;
        self.error_message = Some(message.to_string());
    }
}

/// One `files` part of the multipart request.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadPart<P> {
    /// Filename sent with the part
    pub file_name: String,
    /// Raw file content
    pub payload: P,
}

/// Resolution of a submitted batch.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchOutcome {
    /// The archive was received and handed to the browser.
    Delivered,
    /// The batch failed as a whole.
    Failed(AppError),
}

/// Advisory DOCX filter used by the drop zone.
///
/// Accepts a file when either its MIME type or its extension matches.
/// Drag-and-drop can still deliver anything, so this is a hint, not a check.
pub fn is_docx_candidate(name: &str, mime_type: &str) -> bool {
    mime_type == DOCX_MIME_TYPE || name.to_ascii_lowercase().ends_with(DOCX_EXTENSION)
}

// =============================================================================
// Display Types
// =============================================================================

/// The four mutually exclusive status indicators of a file row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIndicator {
    Idle,
    Spinner,
    SuccessMark,
    FailureMark,
}

impl StatusIndicator {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusIndicator::Idle => "status-idle",
            StatusIndicator::Spinner => "status-spinner",
            StatusIndicator::SuccessMark => "status-success",
            StatusIndicator::FailureMark => "status-error",
        }
    }

    /// Get glyph for display.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusIndicator::Idle => "•",
            StatusIndicator::Spinner => "⏳",
            StatusIndicator::SuccessMark => "✅",
            StatusIndicator::FailureMark => "❌",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Message shown on every entry when the server rejects the batch.
pub const PROCESSING_FAILED: &str = "Processing failed";

/// Message shown on every entry when the request could not complete.
pub const NETWORK_ERROR: &str = "Network error";

/// Batch failure kinds.
///
/// Both are terminal for the batch; they only differ in what the user sees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// The endpoint answered with a non-2xx status.
    #[error("Server responded with status {status}")]
    Server { status: u16 },

    /// The request, the body read or the download could not complete.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl AppError {
    /// Fixed message displayed on the file rows.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Server { .. } => PROCESSING_FAILED,
            AppError::Transport(_) => NETWORK_ERROR,
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
