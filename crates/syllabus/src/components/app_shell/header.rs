use dioxus::prelude::*;

use crate::components::{use_route, Route};

/// Page header: title on the left, view-specific actions on the right.
#[component]
pub fn AppHeader(title: String, children: Element) -> Element {
    rsx! {
        header { class: "sy-header",
            div { class: "sy-header-inner",
                h1 { class: "sy-header-title", "{title}" }
                div { class: "sy-header-actions", {children} }
            }
        }
    }
}

#[component]
pub fn BackToDashboard() -> Element {
    let mut route = use_route();

    rsx! {
        button {
            class: "sy-btn sy-btn--secondary",
            onclick: move |_| route.set(Route::Dashboard),
            "Back to Dashboard"
        }
    }
}
