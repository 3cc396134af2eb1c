use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use syllabus_core::config::{ACCEPTED_UPLOAD_EXTENSIONS, REDIRECT_DELAY_MS};
use syllabus_core::error::Operation;
use syllabus_core::workflow::{
    delete_material, delete_prompt_irreversible, load_for_edit, save_edit, DeleteOutcome,
    EditOutcome,
};
use syllabus_core::{Material, MaterialDraft, SelectedFile};

use crate::components::file_input::{clear_file_input, read_selected};
use crate::components::material_form::MaterialFields;
use crate::components::{
    use_api, use_notice, use_route, AppHeader, BackToDashboard, LoadingScreen, Notice, Route,
};
use crate::platform::{sleep_ms, PlatformConfirmer};

const FILE_INPUT_ID: &str = "sy-file-replace";

/// Edit form. Saving without a new file updates metadata in place; with one,
/// the material is deleted and uploaded again.
#[component]
pub fn EditView(id: String) -> Element {
    let api = use_api();
    let mut route = use_route();
    let mut notice = use_notice();

    let mut original = use_signal(|| None::<Material>);
    let mut draft = use_signal(MaterialDraft::default);
    let mut loading = use_signal(|| true);
    let mut load_failed = use_signal(|| false);

    let mut replacement = use_signal(|| None::<SelectedFile>);
    let mut updating = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);
    let mut data_loss = use_signal(|| false);
    let mut success = use_signal(|| None::<&'static str>);

    use_hook({
        let api = api.clone();
        let id = id.clone();
        move || {
            spawn(async move {
                match load_for_edit(&*api, &id).await {
                    Ok((material, prefilled)) => {
                        draft.set(prefilled);
                        original.set(Some(material));
                    }
                    Err(e) => {
                        error!("Failed to load material {}: {}", id, e);
                        load_failed.set(true);
                    }
                }
                loading.set(false);
            });
        }
    });

    let submit_api = api.clone();
    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if updating() || deleting() {
            return;
        }

        let api = submit_api.clone();
        let id = submit_id.clone();
        spawn(async move {
            error_message.set(None);
            data_loss.set(false);
            success.set(None);
            updating.set(true);

            let current = draft.peek().clone();
            let file = replacement.peek().clone();

            match save_edit(&*api, &id, &current, file.as_ref()).await {
                Ok(outcome) => {
                    success.set(Some(match outcome {
                        EditOutcome::Updated(_) => "Material updated successfully!",
                        EditOutcome::Replaced(_) => "Material replaced successfully!",
                    }));
                    info!("Saved material {} as {}", id, outcome.material().id);
                    // Stay disabled until the view goes away
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    route.set(Route::Dashboard);
                    return;
                }
                Err(e) => {
                    error!("Saving material {} failed: {}", id, e);
                    data_loss.set(e.is_data_loss());
                    error_message.set(Some(e.user_message()));
                }
            }

            updating.set(false);
        });
    };

    let delete_api = api.clone();
    let delete_id = id.clone();
    let handle_delete = move |_: MouseEvent| {
        if updating() || deleting() {
            return;
        }

        let api = delete_api.clone();
        let id = delete_id.clone();
        let title = original
            .peek()
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_else(|| draft.peek().title.clone());

        spawn(async move {
            error_message.set(None);
            deleting.set(true);

            let prompt = delete_prompt_irreversible(&title);
            match delete_material(&*api, &PlatformConfirmer, &id, &prompt).await {
                Ok(DeleteOutcome::Deleted) => {
                    notice.set(Some(Notice::success(format!("Deleted \"{}\"", title))));
                    route.set(Route::Dashboard);
                    return;
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(e) => {
                    error!("Delete of {} failed: {}", id, e);
                    error_message.set(Some(e.user_message()));
                }
            }

            deleting.set(false);
        });
    };

    let handle_file = move |evt: FormEvent| {
        if let Some(picked) = evt.files().into_iter().next() {
            spawn(async move {
                if let Some(selected) = read_selected(picked).await {
                    replacement.set(Some(selected));
                }
            });
        }
    };

    if loading() {
        return rsx! { LoadingScreen {} };
    }

    if load_failed() {
        let message = Operation::Load.fallback_message();
        return rsx! {
            AppHeader { title: "Edit Material".to_string(), BackToDashboard {} }
            main { class: "sy-main sy-main--narrow",
                div { class: "sy-card",
                    div { class: "sy-alert sy-alert--error", "{message}" }
                }
            }
        };
    }

    let busy = updating() || deleting();

    rsx! {
        AppHeader { title: "Edit Material".to_string(), BackToDashboard {} }

        main { class: "sy-main sy-main--narrow",
            form { class: "sy-card sy-form", novalidate: true, onsubmit: handle_submit,
                if let Some(message) = error_message() {
                    div { class: "sy-alert sy-alert--error",
                        p { "{message}" }
                        if data_loss() {
                            button {
                                class: "sy-btn sy-btn--secondary",
                                r#type: "button",
                                onclick: move |_| route.set(Route::Upload),
                                "Go to Upload"
                            }
                        }
                    }
                }
                if let Some(message) = success() {
                    div { class: "sy-alert sy-alert--success", "{message}" }
                }

                div { class: "sy-field",
                    label { class: "sy-label", r#for: FILE_INPUT_ID, "Replace File (optional)" }
                    input {
                        id: FILE_INPUT_ID,
                        class: "sy-input sy-input--file",
                        r#type: "file",
                        accept: ACCEPTED_UPLOAD_EXTENSIONS,
                        onchange: handle_file,
                    }
                    if let Some(file) = replacement() {
                        div { class: "sy-replacement",
                            span { class: "sy-replacement-name",
                                "New file: {file.name} ({file.size_label()})"
                            }
                            button {
                                class: "sy-btn sy-btn--ghost",
                                r#type: "button",
                                onclick: move |_| {
                                    replacement.set(None);
                                    clear_file_input(FILE_INPUT_ID);
                                },
                                "Keep current file"
                            }
                        }
                    }
                    p { class: "sy-warning",
                        "Replacing the file deletes this material and uploads a new one. "
                        "If the upload fails, the original cannot be recovered."
                    }
                }

                MaterialFields { draft }

                div { class: "sy-form-actions",
                    button {
                        class: "sy-btn sy-btn--primary",
                        r#type: "submit",
                        disabled: busy,
                        if updating() { "Updating..." } else { "Update Material" }
                    }
                    button {
                        class: "sy-btn sy-btn--danger",
                        r#type: "button",
                        disabled: busy,
                        onclick: handle_delete,
                        if deleting() { "Deleting..." } else { "Delete Material" }
                    }
                }
            }
        }
    }
}
