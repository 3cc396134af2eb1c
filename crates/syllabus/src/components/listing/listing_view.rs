use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use syllabus_core::workflow::{delete_and_refresh, download_material, fetch_materials};
use syllabus_core::{Material, MaterialFilter, MaterialPage};

use crate::components::{
    logout, use_api, use_auth, use_notice, use_route, AppHeader, Notice, Route,
};
use crate::platform::{PlatformConfirmer, PlatformFileSaver};
use crate::utils::format_material_count;

use super::{EmptyState, FilterBar, MaterialCard, Pagination};

/// Dashboard: filters, the current page of materials, and per-item actions.
#[component]
pub fn ListingView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut route = use_route();
    let mut notice = use_notice();

    let mut filter = use_signal(MaterialFilter::default);
    let mut page = use_signal(MaterialPage::default);
    let mut loading = use_signal(|| true);
    // Bumped per request so a slow response for an old filter is dropped
    let mut generation = use_signal(|| 0u64);
    let mut downloading = use_signal(|| None::<String>);
    let mut deleting = use_signal(|| None::<String>);

    let list_api = api.clone();
    use_effect(move || {
        let current = filter.read().clone();
        let api = list_api.clone();
        let ticket = generation.peek().wrapping_add(1);
        generation.set(ticket);
        loading.set(true);

        spawn(async move {
            let result = fetch_materials(&*api, &current).await;
            if *generation.peek() == ticket {
                page.set(result);
                loading.set(false);
            }
        });
    });

    let download_api = api.clone();
    let on_download = use_callback(move |material: Material| {
        let api = download_api.clone();
        spawn(async move {
            downloading.set(Some(material.id.clone()));
            if let Err(e) = download_material(&*api, &PlatformFileSaver, &material).await {
                error!("Download of {} failed: {}", material.id, e);
                notice.set(Some(Notice::error(e.to_string())));
            }
            downloading.set(None);
        });
    });

    let delete_api = api.clone();
    let on_delete = use_callback(move |material: Material| {
        let api = delete_api.clone();
        spawn(async move {
            deleting.set(Some(material.id.clone()));
            let current = filter.peek().clone();

            match delete_and_refresh(&*api, &PlatformConfirmer, &material, &current).await {
                Ok(Some(refreshed)) => {
                    // The filter may have moved on while the delete was in flight
                    if *filter.peek() == current {
                        if refreshed.filter != current {
                            filter.set(refreshed.filter);
                        }
                        page.set(refreshed.page);
                    }
                    notice.set(Some(Notice::success(format!(
                        "Deleted \"{}\"",
                        material.title
                    ))));
                }
                Ok(None) => info!("Delete of {} cancelled", material.id),
                Err(e) => {
                    error!("Delete of {} failed: {}", material.id, e);
                    notice.set(Some(Notice::error(e.user_message())));
                }
            }
            deleting.set(None);
        });
    });

    let on_edit = move |id: String| {
        notice.set(None);
        route.set(Route::Edit(id));
    };

    let snapshot = auth.read().clone();
    let is_admin = snapshot.is_admin();
    let title = if is_admin { "Admin Dashboard" } else { "Learning Portal" };
    let greeting = snapshot
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    let current_page = page.read().clone();
    let count_label = format_material_count(current_page.total);
    let filtered = !filter.read().is_unfiltered();
    let downloading_id = downloading.read().clone();
    let deleting_id = deleting.read().clone();

    rsx! {
        AppHeader { title: title.to_string(),
            span { class: "sy-header-user", "{greeting}" }
            if is_admin {
                button {
                    class: "sy-btn sy-btn--primary",
                    onclick: move |_| {
                        notice.set(None);
                        route.set(Route::Upload);
                    },
                    "Upload Material"
                }
            }
            button {
                class: "sy-btn sy-btn--secondary",
                onclick: move |_| logout(auth, route),
                "Logout"
            }
        }

        main { class: "sy-main",
            FilterBar { filter }

            section { class: "sy-card sy-listing",
                div { class: "sy-listing-header",
                    h2 { class: "sy-card-title", "Course Materials" }
                    if !loading() {
                        span { class: "sy-muted", "{count_label}" }
                    }
                }

                if loading() {
                    div { class: "sy-loading", "Loading materials..." }
                } else if current_page.is_empty() {
                    EmptyState {
                        filtered,
                        on_clear_filters: move |_| filter.set(MaterialFilter::default()),
                    }
                } else {
                    div { class: "sy-material-list",
                        for material in current_page.materials.iter().cloned() {
                            MaterialCard {
                                key: "{material.id}",
                                downloading: downloading_id.as_deref() == Some(material.id.as_str()),
                                deleting: deleting_id.as_deref() == Some(material.id.as_str()),
                                is_admin,
                                material: material.clone(),
                                on_download,
                                on_edit,
                                on_delete,
                            }
                        }
                    }
                    Pagination {
                        page: current_page.clone(),
                        on_page: move |n| filter.write().go_to_page(n),
                    }
                }
            }
        }
    }
}
