//! Upload controller state.
//!
//! A pure reducer over the selected entries and the processing flag.
//! Components dispatch [`UploadEvent`]s into it; the only side effect it
//! asks for is "send this batch", returned from [`UploadEvent::Submit`].

use crate::types::{BatchOutcome, FileEntry, SelectedFile, UploadPart};

/// Events driving the controller.
#[derive(Clone, Debug)]
pub enum UploadEvent<P> {
    /// Files dropped or picked; replaces the whole list.
    Select(Vec<SelectedFile<P>>),
    /// The user asked to process the current list.
    Submit,
    /// The in-flight batch finished.
    Resolve(BatchOutcome),
}

/// Selected entries plus the single in-flight gate.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadState<P> {
    entries: Vec<FileEntry<P>>,
    processing: bool,
}

impl<P> Default for UploadState<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            processing: false,
        }
    }
}

impl<P: Clone> UploadState<P> {
    /// Apply an event.
    ///
    /// Returns the parts to upload when a `Submit` starts a new batch,
    /// `None` otherwise.
    pub fn apply(&mut self, event: UploadEvent<P>) -> Option<Vec<UploadPart<P>>> {
        match event {
            UploadEvent::Select(files) => {
                self.accept_selection(files);
                None
            }
            UploadEvent::Submit => self.begin_submit(),
            UploadEvent::Resolve(outcome) => {
                self.resolve(outcome);
                None
            }
        }
    }

    fn accept_selection(&mut self, files: Vec<SelectedFile<P>>) {
        self.entries = files.into_iter().map(FileEntry::pending).collect();
        log::info!("📂 {} file(s) selected", self.entries.len());
    }

    fn begin_submit(&mut self) -> Option<Vec<UploadPart<P>>> {
        if !self.can_submit() {
            return None;
        }

        self.processing = true;
        let parts = self
            .entries
            .iter_mut()
            .map(|entry| {
                entry.mark_processing();
                UploadPart {
                    file_name: entry.name().to_string(),
                    payload: entry.payload().clone(),
                }
            })
            .collect();

        Some(parts)
    }

    fn resolve(&mut self, outcome: BatchOutcome) {
        match &outcome {
            BatchOutcome::Delivered => {
                self.entries.iter_mut().for_each(FileEntry::mark_success);
            }
            BatchOutcome::Failed(error) => {
                let message = error.user_message();
                self.entries.iter_mut().for_each(|entry| entry.mark_error(message));
            }
        }
        self.processing = false;
    }
}

impl<P> UploadState<P> {
    pub fn entries(&self) -> &[FileEntry<P>] {
        &self.entries
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.processing && !self.entries.is_empty()
    }

    /// File list heading.
    pub fn heading(&self) -> String {
        format!("Files ({})", self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppError, FileStatus};

    fn select(names: &[&str]) -> UploadEvent<Vec<u8>> {
        UploadEvent::Select(
            names
                .iter()
                .map(|name| SelectedFile::new(*name, name.as_bytes().to_vec()))
                .collect(),
        )
    }

    fn names(state: &UploadState<Vec<u8>>) -> Vec<&str> {
        state.entries().iter().map(|e| e.name()).collect()
    }

    #[test]
    fn test_selection_creates_pending_entries_in_order() {
        let mut state = UploadState::default();
        assert!(state.apply(select(&["a.docx", "b.docx", "c.docx"])).is_none());

        assert_eq!(names(&state), vec!["a.docx", "b.docx", "c.docx"]);
        assert!(state.entries().iter().all(|e| e.status() == FileStatus::Pending));
        assert!(state.entries().iter().all(|e| e.error_message().is_none()));
        assert_eq!(state.heading(), "Files (3)");
    }

    #[test]
    fn test_empty_selection_clears_list() {
        let mut state = UploadState::default();
        state.apply(select(&["a.docx"]));
        state.apply(select(&[]));

        assert!(state.is_empty());
        assert!(!state.can_submit());
    }

    #[test]
    fn test_selection_replaces_wholesale() {
        let mut state = UploadState::default();
        state.apply(select(&["a.docx", "b.docx"]));
        state.apply(UploadEvent::Submit);
        state.apply(UploadEvent::Resolve(BatchOutcome::Delivered));

        state.apply(select(&["c.docx"]));
        assert_eq!(names(&state), vec!["c.docx"]);
        assert_eq!(state.entries()[0].status(), FileStatus::Pending);
    }

    #[test]
    fn test_submit_on_empty_is_noop() {
        let mut state: UploadState<Vec<u8>> = UploadState::default();
        let before = state.clone();

        assert!(state.apply(UploadEvent::Submit).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_submit_returns_parts_and_gates_reentry() {
        let mut state = UploadState::default();
        state.apply(select(&["a.docx", "b.docx"]));

        let parts = state.apply(UploadEvent::Submit).expect("batch should start");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].file_name, "a.docx");
        assert_eq!(parts[0].payload, b"a.docx".to_vec());
        assert_eq!(parts[1].file_name, "b.docx");

        assert!(state.is_processing());
        assert!(!state.can_submit());
        assert!(state.entries().iter().all(|e| e.status() == FileStatus::Processing));

        // Second click while in flight
        let snapshot = state.clone();
        assert!(state.apply(UploadEvent::Submit).is_none());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_resolve_success_marks_all() {
        let mut state = UploadState::default();
        state.apply(select(&["a.docx", "b.docx"]));
        state.apply(UploadEvent::Submit);
        state.apply(UploadEvent::Resolve(BatchOutcome::Delivered));

        assert!(!state.is_processing());
        assert!(state.entries().iter().all(|e| e.status() == FileStatus::Success));
        assert!(state.can_submit());
    }

    #[test]
    fn test_resolve_failures_mark_all_with_message() {
        let cases = [
            (AppError::Server { status: 500 }, "Processing failed"),
            (AppError::Transport("offline".into()), "Network error"),
        ];

        for (error, message) in cases {
            let mut state = UploadState::default();
            state.apply(select(&["a.docx", "b.docx"]));
            state.apply(UploadEvent::Submit);
            state.apply(UploadEvent::Resolve(BatchOutcome::Failed(error)));

            assert!(!state.is_processing());
            for entry in state.entries() {
                assert_eq!(entry.status(), FileStatus::Error);
                assert_eq!(entry.error_message(), Some(message));
            }
        }
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut state = UploadState::default();
        state.apply(select(&["c.docx"]));
        state.apply(UploadEvent::Submit);
        state.apply(UploadEvent::Resolve(BatchOutcome::Failed(AppError::Server {
            status: 500,
        })));

        let parts = state.apply(UploadEvent::Submit).expect("retry should start");
        assert_eq!(parts.len(), 1);
        assert_eq!(state.entries()[0].status(), FileStatus::Processing);
        assert_eq!(state.entries()[0].error_message(), None);
    }

    #[test]
    fn test_selection_during_flight_keeps_gate() {
        let mut state = UploadState::default();
        state.apply(select(&["a.docx"]));
        state.apply(UploadEvent::Submit);

        state.apply(select(&["b.docx"]));
        assert!(state.is_processing());
        assert!(!state.can_submit());

        state.apply(UploadEvent::Resolve(BatchOutcome::Delivered));
        assert!(!state.is_processing());
        assert_eq!(state.entries()[0].status(), FileStatus::Success);
    }
}
