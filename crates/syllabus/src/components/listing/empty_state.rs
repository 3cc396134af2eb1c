use dioxus::prelude::*;

/// Shown when a listing request returns no materials.
#[component]
pub fn EmptyState(filtered: bool, on_clear_filters: EventHandler<()>) -> Element {
    rsx! {
        div { class: "sy-empty-state",
            p { class: "sy-empty-title", "No materials found" }
            if filtered {
                p { class: "sy-muted", "Nothing matches the current filters." }
                button {
                    class: "sy-btn sy-btn--ghost",
                    onclick: move |_| on_clear_filters.call(()),
                    "Clear filters"
                }
            } else {
                p { class: "sy-muted", "Nothing has been uploaded yet." }
            }
        }
    }
}
