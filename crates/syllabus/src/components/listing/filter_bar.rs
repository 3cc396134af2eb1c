use dioxus::prelude::*;
use syllabus_core::{Category, MaterialFilter};

/// Category, week, topic, and free-text filters. Every edit writes straight
/// to `filter`, which the listing watches.
#[component]
pub fn FilterBar(mut filter: Signal<MaterialFilter>) -> Element {
    let current = filter.read().clone();
    let selected_category = current.category.map(|c| c.as_str()).unwrap_or("");

    rsx! {
        section { class: "sy-card sy-filters",
            div { class: "sy-filters-header",
                h2 { class: "sy-card-title", "Filters" }
                if !current.is_unfiltered() {
                    button {
                        class: "sy-btn sy-btn--ghost",
                        onclick: move |_| filter.set(MaterialFilter::default()),
                        "Clear"
                    }
                }
            }
            div { class: "sy-filters-grid",
                div { class: "sy-field",
                    label { class: "sy-label", r#for: "sy-filter-category", "Category" }
                    select {
                        id: "sy-filter-category",
                        class: "sy-input",
                        value: "{selected_category}",
                        onchange: move |evt| filter.write().set_category(&evt.value()),
                        option { value: "", selected: current.category.is_none(), "All" }
                        for category in Category::ALL {
                            option {
                                value: category.as_str(),
                                selected: current.category == Some(category),
                                "{category.label()}"
                            }
                        }
                    }
                }
                div { class: "sy-field",
                    label { class: "sy-label", r#for: "sy-filter-week", "Week" }
                    input {
                        id: "sy-filter-week",
                        class: "sy-input",
                        r#type: "number",
                        min: "1",
                        placeholder: "Week number",
                        value: "{current.week}",
                        oninput: move |evt| filter.write().set_week(evt.value()),
                    }
                }
                div { class: "sy-field",
                    label { class: "sy-label", r#for: "sy-filter-topic", "Topic" }
                    input {
                        id: "sy-filter-topic",
                        class: "sy-input",
                        r#type: "text",
                        placeholder: "Topic",
                        value: "{current.topic}",
                        oninput: move |evt| filter.write().set_topic(evt.value()),
                    }
                }
                div { class: "sy-field",
                    label { class: "sy-label", r#for: "sy-filter-search", "Search" }
                    input {
                        id: "sy-filter-search",
                        class: "sy-input",
                        r#type: "text",
                        placeholder: "Search title or description",
                        value: "{current.search}",
                        oninput: move |evt| filter.write().set_search(evt.value()),
                    }
                }
            }
        }
    }
}
