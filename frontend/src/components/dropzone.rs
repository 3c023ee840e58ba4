//! DOCX drop zone with drag & drop and click-to-browse.
//!
//! Dropped and picked files go through the same advisory DOCX filter
//! before being handed to `on_select`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::config::accept_attribute;
use crate::types::{is_docx_candidate, SelectedFile};

const FILE_INPUT_ID: &str = "docxInput";

#[component]
pub fn Dropzone(
    /// Receives the accepted files of every drop or pick
    on_select: Callback<Vec<SelectedFile<File>>>,
) -> impl IntoView {
    let (is_drag_active, set_drag_active) = create_signal(false);

    let on_drag_over = move |ev: DragEvent| {
        // Required for the drop event to fire
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |_: DragEvent| {
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_select.call(accepted_files(&files));
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            on_select.call(accepted_files(&files));
        }
        // Picking the same file again must fire a new change event
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(input) = document()
            .get_element_by_id(FILE_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <div
            class="upload-section"
            class:drag-active=move || is_drag_active.get()
            on:click=trigger_file_input
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"📤"</div>
            <div class="upload-text">
                {move || if is_drag_active.get() {
                    "Drop your DOCX files here"
                } else {
                    "Drag & drop DOCX files here"
                }}
            </div>
            <div class="upload-hint">"or click to select files"</div>

            <input
                type="file"
                id=FILE_INPUT_ID
                accept=accept_attribute()
                multiple=true
                style="display:none"
                // Keep the click from bubbling back to the zone
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}

/// Apply the DOCX filter to a browser file list, keeping its order.
fn accepted_files(files: &FileList) -> Vec<SelectedFile<File>> {
    let mut accepted = Vec::with_capacity(files.length() as usize);

    for file in (0..files.length()).filter_map(|i| files.get(i)) {
        let name = file.name();
        if is_docx_candidate(&name, &file.type_()) {
            accepted.push(SelectedFile::new(name, file));
        } else {
            log::warn!("⚠️ Skipped {}: not a .docx file", name);
        }
    }

    accepted
}
