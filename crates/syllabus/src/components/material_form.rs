use dioxus::prelude::*;
use syllabus_core::{Category, MaterialDraft};

/// Metadata fields shared by the upload and edit forms, bound to `draft`.
#[component]
pub fn MaterialFields(mut draft: Signal<MaterialDraft>) -> Element {
    let current = draft.read().clone();

    rsx! {
        div { class: "sy-field",
            label { class: "sy-label", r#for: "sy-title", "Title *" }
            input {
                id: "sy-title",
                class: "sy-input",
                r#type: "text",
                required: true,
                value: "{current.title}",
                oninput: move |evt| draft.write().title = evt.value(),
            }
        }

        div { class: "sy-field",
            label { class: "sy-label", r#for: "sy-description", "Description" }
            textarea {
                id: "sy-description",
                class: "sy-input",
                rows: "4",
                value: "{current.description}",
                oninput: move |evt| draft.write().description = evt.value(),
            }
        }

        div { class: "sy-field",
            label { class: "sy-label", r#for: "sy-category", "Category *" }
            select {
                id: "sy-category",
                class: "sy-input",
                value: "{current.category.as_str()}",
                onchange: move |evt| {
                    if let Ok(category) = evt.value().parse::<Category>() {
                        draft.write().category = category;
                    }
                },
                for category in Category::ALL {
                    option {
                        value: category.as_str(),
                        selected: category == current.category,
                        "{category.label()}"
                    }
                }
            }
        }

        div { class: "sy-field-row",
            div { class: "sy-field",
                label { class: "sy-label", r#for: "sy-week", "Week" }
                input {
                    id: "sy-week",
                    class: "sy-input",
                    r#type: "number",
                    min: "1",
                    value: "{current.week}",
                    oninput: move |evt| draft.write().week = evt.value(),
                }
            }
            div { class: "sy-field",
                label { class: "sy-label", r#for: "sy-topic", "Topic" }
                input {
                    id: "sy-topic",
                    class: "sy-input",
                    r#type: "text",
                    value: "{current.topic}",
                    oninput: move |evt| draft.write().topic = evt.value(),
                }
            }
        }

        div { class: "sy-field",
            label { class: "sy-label", r#for: "sy-tags", "Tags (comma-separated)" }
            input {
                id: "sy-tags",
                class: "sy-input",
                r#type: "text",
                placeholder: "e.g., sorting, algorithms, intro",
                value: "{current.tags}",
                oninput: move |evt| draft.write().tags = evt.value(),
            }
        }
    }
}
