use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use syllabus_core::workflow::upload_material;
use syllabus_core::{MaterialDraft, SelectedFile};

use crate::components::file_input::clear_file_input;
use crate::components::material_form::MaterialFields;
use crate::components::{use_api, AppHeader, BackToDashboard};

use super::DropZone;

const FILE_INPUT_ID: &str = "sy-file-upload";

/// Upload form. Stays on the page after success so several files can be
/// added in a row.
#[component]
pub fn UploadView() -> Element {
    let api = use_api();

    let mut draft = use_signal(MaterialDraft::default);
    let mut file = use_signal(|| None::<SelectedFile>);
    let mut uploading = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if uploading() {
            return;
        }

        let api = api.clone();
        spawn(async move {
            error_message.set(None);
            success.set(false);
            uploading.set(true);

            let current = draft.peek().clone();
            let selected = file.peek().clone();

            match upload_material(&*api, &current, selected.as_ref()).await {
                Ok(_) => {
                    success.set(true);
                    draft.set(MaterialDraft::default());
                    file.set(None);
                    clear_file_input(FILE_INPUT_ID);
                }
                Err(e) => {
                    error!("Upload failed: {}", e);
                    error_message.set(Some(e.user_message()));
                }
            }

            uploading.set(false);
        });
    };

    rsx! {
        AppHeader { title: "Upload Material".to_string(), BackToDashboard {} }

        main { class: "sy-main sy-main--narrow",
            form { class: "sy-card sy-form", novalidate: true, onsubmit: handle_submit,
                if let Some(message) = error_message() {
                    div { class: "sy-alert sy-alert--error", "{message}" }
                }
                if success() {
                    div { class: "sy-alert sy-alert--success", "Material uploaded successfully!" }
                }

                div { class: "sy-field",
                    label { class: "sy-label", "File *" }
                    DropZone {
                        input_id: FILE_INPUT_ID.to_string(),
                        file: file(),
                        on_file_selected: move |selected| file.set(Some(selected)),
                    }
                }

                MaterialFields { draft }

                button {
                    class: "sy-btn sy-btn--primary sy-btn--block",
                    r#type: "submit",
                    disabled: uploading(),
                    if uploading() { "Uploading..." } else { "Upload Material" }
                }
            }
        }
    }
}
