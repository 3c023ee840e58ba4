//! UI Components for the DOCX Processor application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`Dropzone`] - DOCX selection with drag & drop
//! - [`FileList`] - Selected files, batch status and submit button

mod hero;
mod dropzone;
mod file_list;

pub use hero::*;
pub use dropzone::*;
pub use file_list::*;
