use dioxus::logger::tracing::info;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::time::Duration;
use syllabus_core::config::API_TOKEN_ENV;
use syllabus_core::workflow::{Confirmer, FileSaver};

/// Asks where to save with a native dialog, then writes the file.
pub struct PlatformFileSaver;

#[async_trait::async_trait(?Send)]
impl FileSaver for PlatformFileSaver {
    async fn save(&self, filename: &str, _mime: &str, bytes: &[u8]) -> Result<(), String> {
        let Some(handle) = AsyncFileDialog::new()
            .set_title("Save material")
            .set_file_name(filename)
            .save_file()
            .await
        else {
            info!("Save of {} cancelled", filename);
            return Ok(());
        };

        tokio::fs::write(handle.path(), bytes)
            .await
            .map_err(|e| format!("{}: {}", handle.path().display(), e))
    }
}

/// Yes/No native message dialog.
pub struct PlatformConfirmer;

#[async_trait::async_trait(?Send)]
impl Confirmer for PlatformConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        let answer = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm")
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;
        answer == MessageDialogResult::Yes
    }
}

pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
}

pub fn stored_token() -> Option<String> {
    std::env::var(API_TOKEN_ENV).ok()
}

/// The environment token outlives the window; there is nothing to clear.
pub fn forget_token() {}
