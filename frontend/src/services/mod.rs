//! Processing-service and browser services.
//!
//! # Services
//!
//! - [`process`] - Batch upload to `/api/process`
//! - [`download`] - Save-as of the returned archive

pub mod process;
pub mod download;

pub use process::*;
pub use download::*;
