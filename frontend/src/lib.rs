//! DOCX Processor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for sending a batch of DOCX files to the
//! processing service and downloading the processed archive.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns UploadState)                              │
//! │  ├── Hero (title, description)                              │
//! │  ├── Dropzone ──── Select ────▶ UploadState                 │
//! │  └── FileList ──── Submit ────▶ submit_batch ─▶ Resolve     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Entries, statuses and errors
//! - [`state`] - Upload controller reducer
//! - [`components`] - UI components (Hero, Dropzone, FileList)
//! - [`services`] - Processing request and archive download

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Entries
    FileEntry, FileStatus, SelectedFile, UploadPart, BatchOutcome,
    // Display
    StatusIndicator,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{UploadEvent, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (state, set_state) = create_signal(UploadState::<File>::default());

    let on_select = Callback::new(move |files: Vec<SelectedFile<File>>| {
        set_state.update(|s| {
            s.apply(UploadEvent::Select(files));
        });
    });

    let on_submit = Callback::new(move |_: ()| {
        let mut batch = None;
        set_state.update(|s| batch = s.apply(UploadEvent::Submit));

        // Empty list or a batch already in flight
        let Some(parts) = batch else {
            return;
        };

        spawn_local(async move {
            let client = HttpProcessingClient::default();
            let outcome = submit_batch(&client, &BrowserDownloader, parts).await;
            set_state.update(|s| {
                s.apply(UploadEvent::Resolve(outcome));
            });
        });
    });

    view! {
        <div class="container">
            <Hero/>
            <Dropzone on_select=on_select/>
            <FileList state=state on_submit=on_submit/>
        </div>
    }
}
