use dioxus::logger::tracing::warn;
use syllabus_core::workflow::{Confirmer, FileSaver};
use wasm_bindgen::{JsCast, JsValue};

/// `localStorage` key the login flow stores the bearer token under.
const TOKEN_KEY: &str = "token";

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// A blob object URL, revoked when dropped.
///
/// Holding the URL in a guard means every exit from [`PlatformFileSaver::save`],
/// including the error paths after creation, releases the blob.
struct ObjectUrl(String);

impl ObjectUrl {
    fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, String> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        Ok(Self(url))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = web_sys::Url::revoke_object_url(&self.0) {
            warn!("Failed to revoke object URL: {}", js_error(e));
        }
    }
}

/// Triggers a browser download through a temporary anchor element.
pub struct PlatformFileSaver;

#[async_trait::async_trait(?Send)]
impl FileSaver for PlatformFileSaver {
    async fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document available")?;
        let body = document.body().ok_or("No document body")?;

        let url = ObjectUrl::from_bytes(bytes, mime)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "Created element is not an anchor".to_string())?;
        anchor.set_href(url.as_str());
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(js_error)?;
        anchor.click();
        anchor.remove();

        Ok(())
    }
}

/// Uses the browser's blocking `confirm()` dialog.
pub struct PlatformConfirmer;

#[async_trait::async_trait(?Send)]
impl Confirmer for PlatformConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

pub fn forget_token() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(TOKEN_KEY) {
            warn!("Failed to clear stored token: {}", js_error(e));
        }
    }
}
