use dioxus::prelude::*;

/// Shown to visitors without a session. Signing in happens on the portal's
/// login page, which stores the token this app reads at startup.
#[component]
pub fn LoginRequired() -> Element {
    rsx! {
        section { class: "sy-centered",
            div { class: "sy-card sy-login-card",
                h1 { class: "sy-card-title", "Sign in required" }
                p { class: "sy-muted",
                    "Sign in through the portal login page, then reload this window to browse course materials."
                }
            }
        }
    }
}
