//! Selected files with their batch status and the submit button.

use leptos::*;
use web_sys::File;

use crate::state::UploadState;
use crate::types::FileStatus;

#[component]
pub fn FileList(
    state: ReadSignal<UploadState<File>>,
    /// Fired by the "Process Files" button
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_processing = move || state.with(|s| s.is_processing());

    let rows = move || {
        state.with(|s| {
            s.entries()
                .iter()
                .map(|entry| {
                    view! {
                        <FileRow
                            name=entry.name().to_string()
                            status=entry.status()
                            error=entry.error_message().map(str::to_string)
                        />
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show
            when=move || state.with(|s| !s.is_empty())
            fallback=|| view! { }
        >
            <div class="file-list">
                <h2 class="file-list-title">{move || state.with(|s| s.heading())}</h2>
                <div class="file-rows">{rows}</div>

                <button
                    class="process-button"
                    class:busy=is_processing
                    disabled=move || state.with(|s| !s.can_submit())
                    on:click=move |_| on_submit.call(())
                >
                    {move || if is_processing() {
                        view! {
                            <span class="button-busy">
                                <span class="spinner">"⏳"</span>
                                "Processing..."
                            </span>
                        }.into_view()
                    } else {
                        "Process Files".into_view()
                    }}
                </button>
            </div>
        </Show>
    }
}

#[component]
fn FileRow(name: String, status: FileStatus, error: Option<String>) -> impl IntoView {
    let indicator = status.indicator();

    view! {
        <div class="file-row">
            <div class="file-name">
                <span class="file-icon">"📄"</span>
                <span>{name}</span>
            </div>
            <div class=format!("file-status {}", indicator.css_class())>
                {error.map(|message| view! { <span class="file-error">{message}</span> })}
                <span class="status-glyph">{indicator.glyph()}</span>
            </div>
        </div>
    }
}
