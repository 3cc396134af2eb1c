//! UI components for the Syllabus application.
//!
//! - `app_shell`: header bar and notice banner shared by every view
//! - `guard`: access gating in front of each view
//! - `listing`: dashboard with filters, material cards, and pagination
//! - `upload`: upload form with drag-and-drop
//! - `edit`: edit form with optional file replacement
//! - `material_form`: metadata fields shared by upload and edit
//!
//! # Context Providers
//!
//! The app provides three contexts:
//!
//! ```ignore
//! let api = use_api();       // ApiHandle: shared MaterialsApi client
//! let auth = use_auth();     // Signal<AuthSnapshot>: who is signed in
//! let route = use_route();   // Signal<Route>: current view
//! ```

mod app_shell;
mod edit;
mod file_input;
mod guard;
mod listing;
mod login;
mod material_form;
mod upload;

pub use app_shell::{use_notice, AppHeader, BackToDashboard, Notice, NoticeBanner, NoticeKind};
pub use edit::EditView;
pub use guard::{AccessGuard, LoadingScreen};
pub use listing::ListingView;
pub use login::LoginRequired;
pub use upload::UploadView;

use crate::platform;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use std::ops::Deref;
use std::rc::Rc;
use syllabus_core::{Access, ApiConfig, ApiError, AuthSnapshot, HttpMaterialsApi, MaterialsApi};

/// In-app navigation target.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Sign-in happens outside this app; the view only says so.
    Login,
    Dashboard,
    Upload,
    Edit(String),
}

/// Shared handle to the API client.
///
/// Two handles are equal when they point at the same client, which keeps
/// components that take one as a prop from re-rendering needlessly.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn MaterialsApi>);

impl ApiHandle {
    pub fn new(api: impl MaterialsApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiHandle {
    type Target = dyn MaterialsApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

pub fn use_auth() -> Signal<AuthSnapshot> {
    use_context::<Signal<AuthSnapshot>>()
}

pub fn use_route() -> Signal<Route> {
    use_context::<Signal<Route>>()
}

/// Ends the session: drops the stored token and returns to the login view.
pub fn logout(mut auth: Signal<AuthSnapshot>, mut route: Signal<Route>) {
    platform::forget_token();
    auth.set(AuthSnapshot::signed_out());
    route.set(Route::Login);
    info!("Signed out");
}

/// Builds the HTTP client from the environment and the stored token.
fn connect() -> Result<ApiHandle, ApiError> {
    let config = ApiConfig::from_env()?.with_token(platform::stored_token());
    info!("Using API at {}", config.base_url());
    Ok(ApiHandle::new(HttpMaterialsApi::new(config)?))
}

#[component]
pub fn App() -> Element {
    let client = use_hook(connect);

    match client {
        Ok(api) => rsx! { Portal { api } },
        Err(e) => {
            error!("Cannot start: {}", e);
            rsx! {
                div { class: "sy-fatal",
                    h1 { "Syllabus cannot start" }
                    p { "{e}" }
                }
            }
        }
    }
}

/// Provides the contexts, resolves the session, and renders the current route.
#[component]
fn Portal(api: ApiHandle) -> Element {
    use_context_provider(|| api.clone());

    let mut auth = use_signal(AuthSnapshot::resolving);
    use_context_provider(|| auth);

    let route = use_signal(|| Route::Dashboard);
    use_context_provider(|| route);

    // Notices outlive view switches so "deleted" can be shown on the dashboard
    let notice = use_signal(|| None::<Notice>);
    use_context_provider(|| notice);

    // Resolve the signed-in user once
    use_hook(|| {
        let api = api.clone();
        spawn(async move {
            match api.current_user().await {
                Ok(user) => {
                    info!("Signed in as {} ({:?})", user.email, user.role);
                    auth.set(AuthSnapshot::signed_in(user));
                }
                Err(e) => {
                    warn!("No active session: {}", e);
                    auth.set(AuthSnapshot::signed_out());
                }
            }
        });
    });

    let current = route.read().clone();

    rsx! {
        div { class: "sy-app",
            NoticeBanner {}
            match current {
                Route::Login => rsx! { LoginRequired {} },
                Route::Dashboard => rsx! {
                    AccessGuard { key: "{\"dashboard\"}", access: Access::Authenticated, ListingView {} }
                },
                Route::Upload => rsx! {
                    AccessGuard { key: "{\"upload\"}", access: Access::Admin, UploadView {} }
                },
                Route::Edit(id) => rsx! {
                    AccessGuard { key: "edit-{id}", access: Access::Admin,
                        EditView { key: "{id}", id: id.clone() }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllabus_core::InMemoryMaterialsApi;

    #[test]
    fn test_api_handle_equality_is_identity() {
        let handle = ApiHandle::new(InMemoryMaterialsApi::new());
        let same = handle.clone();
        let other = ApiHandle::new(InMemoryMaterialsApi::new());

        assert!(handle == same);
        assert!(handle != other);
    }

    #[tokio::test]
    async fn test_api_handle_derefs_to_client() {
        let handle = ApiHandle::new(InMemoryMaterialsApi::new());
        let page = handle
            .list(&syllabus_core::MaterialFilter::default())
            .await
            .unwrap();
        assert!(page.is_empty());
    }
}
