//! App shell components: AppHeader, NoticeBanner
//!
//! These components form the persistent frame around each view.

mod header;
mod notice;

pub use header::{AppHeader, BackToDashboard};
pub use notice::{use_notice, Notice, NoticeBanner, NoticeKind};
