use dioxus::prelude::*;
use dioxus::html::HasFileData;
use syllabus_core::config::ACCEPTED_UPLOAD_EXTENSIONS;
use syllabus_core::dropzone::{DragSignal, DragState};
use syllabus_core::SelectedFile;

use crate::components::file_input::read_selected;

/// File picker that also accepts a dropped file. Both paths end in
/// `on_file_selected` with the same [`SelectedFile`].
#[component]
pub fn DropZone(
    input_id: String,
    file: Option<SelectedFile>,
    on_file_selected: EventHandler<SelectedFile>,
) -> Element {
    let mut state = use_signal(DragState::default);

    let mut track = move |evt: DragEvent, signal: DragSignal| {
        evt.prevent_default();
        evt.stop_propagation();
        let next = state.peek().next(signal);
        if next != *state.peek() {
            state.set(next);
        }
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        if let Some(dropped) = state.write().drop_files(evt.files()) {
            spawn(async move {
                if let Some(selected) = read_selected(dropped).await {
                    on_file_selected.call(selected);
                }
            });
        }
    };

    let handle_change = move |evt: FormEvent| {
        if let Some(picked) = evt.files().into_iter().next() {
            spawn(async move {
                if let Some(selected) = read_selected(picked).await {
                    on_file_selected.call(selected);
                }
            });
        }
    };

    let class = if state.read().is_active() {
        "sy-dropzone sy-dropzone--active"
    } else {
        "sy-dropzone"
    };

    rsx! {
        div {
            class,
            ondragenter: move |evt| track(evt, DragSignal::Enter),
            ondragover: move |evt| track(evt, DragSignal::Over),
            ondragleave: move |evt| track(evt, DragSignal::Leave),
            ondrop: handle_drop,

            input {
                id: "{input_id}",
                class: "sy-hidden-input",
                r#type: "file",
                accept: ACCEPTED_UPLOAD_EXTENSIONS,
                onchange: handle_change,
            }
            label { class: "sy-dropzone-label", r#for: "{input_id}",
                div { class: "sy-dropzone-icon", "⇪" }
                match file {
                    Some(selected) => rsx! {
                        span { class: "sy-dropzone-file",
                            "{selected.name} ({selected.size_label()})"
                        }
                    },
                    None => rsx! {
                        span {
                            span { class: "sy-dropzone-cta", "Click to upload" }
                            " or drag and drop"
                        }
                    },
                }
                span { class: "sy-dropzone-hint", "PDF, DOC, PPT, images, videos, and more" }
            }
        }
    }
}
