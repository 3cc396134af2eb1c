use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// App-wide, dismissible message for actions that have no form of their own
/// (download and delete from the listing).
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub fn use_notice() -> Signal<Option<Notice>> {
    use_context::<Signal<Option<Notice>>>()
}

#[component]
pub fn NoticeBanner() -> Element {
    let mut notice = use_notice();

    let Some(current) = notice.read().clone() else {
        return rsx! {};
    };

    let class = match current.kind {
        NoticeKind::Success => "sy-notice sy-notice--success",
        NoticeKind::Error => "sy-notice sy-notice--error",
    };

    rsx! {
        div { class, role: "status",
            span { class: "sy-notice-text", "{current.message}" }
            button {
                class: "sy-notice-close",
                "aria-label": "Dismiss",
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    }
}
