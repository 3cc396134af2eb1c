use dioxus::prelude::*;
use syllabus_core::{gate, Access, GateDecision, RedirectTarget};

use crate::components::{use_auth, use_route, Route};

/// Full-page placeholder while the session or a record is loading.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "sy-centered",
            div { class: "sy-loading", "{label}" }
        }
    }
}

/// Renders `children` only when the signed-in user has `access`.
///
/// Children own their data-fetching hooks, so nothing is requested until the
/// gate opens. Redirects happen from an effect rather than during render.
#[component]
pub fn AccessGuard(access: Access, children: Element) -> Element {
    let auth = use_auth();
    let mut route = use_route();

    let decision = gate(&auth.read(), access);

    use_effect(move || {
        if let GateDecision::Redirect(target) = gate(&auth.read(), access) {
            route.set(match target {
                RedirectTarget::Login => Route::Login,
                RedirectTarget::Dashboard => Route::Dashboard,
            });
        }
    });

    match decision {
        GateDecision::Allow => rsx! { {children} },
        GateDecision::Pending | GateDecision::Redirect(_) => rsx! { LoadingScreen {} },
    }
}
