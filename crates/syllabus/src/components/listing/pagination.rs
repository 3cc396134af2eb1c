use dioxus::prelude::*;
use syllabus_core::MaterialPage;

/// Previous/next controls. Hidden when everything fits on one page.
#[component]
pub fn Pagination(page: MaterialPage, on_page: EventHandler<u32>) -> Element {
    let page_count = page.page_count();
    if page_count <= 1 {
        return rsx! {};
    }

    let current = page.page;

    rsx! {
        nav { class: "sy-pagination", "aria-label": "Pages",
            button {
                class: "sy-btn sy-btn--secondary",
                disabled: !page.has_previous(),
                onclick: move |_| on_page.call(current.saturating_sub(1)),
                "Previous"
            }
            span { class: "sy-pagination-label", "Page {current} of {page_count}" }
            button {
                class: "sy-btn sy-btn--secondary",
                disabled: !page.has_next(),
                onclick: move |_| on_page.call(current + 1),
                "Next"
            }
        }
    }
}
