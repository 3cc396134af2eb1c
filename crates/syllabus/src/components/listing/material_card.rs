use dioxus::prelude::*;
use syllabus_core::Material;

use crate::utils::format_date;

/// One material in the listing. Every optional field may be absent.
#[component]
pub fn MaterialCard(
    material: Material,
    is_admin: bool,
    downloading: bool,
    deleting: bool,
    on_download: EventHandler<Material>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<Material>,
) -> Element {
    let added = format_date(&material.created_at);
    let for_download = material.clone();
    let for_delete = material.clone();
    let id = material.id.clone();

    rsx! {
        article { class: "sy-material",
            div { class: "sy-material-main",
                h3 { class: "sy-material-title", "{material.title}" }
                if let Some(description) = material.description() {
                    p { class: "sy-material-description", "{description}" }
                }
                div { class: "sy-chips",
                    span { class: "sy-chip sy-chip--category", "{material.category.label()}" }
                    if let Some(week) = material.week {
                        span { class: "sy-chip sy-chip--week", "Week {week}" }
                    }
                    if let Some(topic) = material.topic() {
                        span { class: "sy-chip sy-chip--topic", "{topic}" }
                    }
                    for tag in material.tags.iter() {
                        span { key: "{tag}", class: "sy-chip", "{tag}" }
                    }
                }
                p { class: "sy-material-meta", "Added {added}" }
            }
            div { class: "sy-material-actions",
                button {
                    class: "sy-btn sy-btn--primary",
                    disabled: downloading,
                    onclick: move |_| on_download.call(for_download.clone()),
                    if downloading { "Downloading..." } else { "Download" }
                }
                if is_admin {
                    button {
                        class: "sy-btn sy-btn--success",
                        onclick: move |_| on_edit.call(id.clone()),
                        "Edit"
                    }
                    button {
                        class: "sy-btn sy-btn--danger",
                        disabled: deleting,
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
