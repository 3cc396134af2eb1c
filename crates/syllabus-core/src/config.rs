//! Configuration constants and API endpoint resolution.
//!
//! # Usage
//!
//! ```
//! use syllabus_core::config::ApiConfig;
//!
//! let config = ApiConfig::new("http://localhost:8000/api").unwrap();
//! let url = config.endpoint(&["materials", "42", "download"]);
//! assert_eq!(url.as_str(), "http://localhost:8000/api/materials/42/download");
//! ```

use crate::error::ApiError;
use std::fmt;
use url::Url;

// =============================================================================
// API
// =============================================================================

/// Path segment every material endpoint lives under.
pub const MATERIALS_SEGMENT: &str = "materials";

/// Endpoint the signed-in user is resolved from.
pub const CURRENT_USER_PATH: [&str; 2] = ["auth", "me"];

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable holding the API base URL.
///
/// Read at runtime on desktop and at compile time on web.
pub const API_URL_ENV: &str = "SYLLABUS_API_URL";

/// Environment variable holding a bearer token (desktop only).
pub const API_TOKEN_ENV: &str = "SYLLABUS_API_TOKEN";

/// Per-request timeout on native targets. The browser governs timeouts on web.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = concat!("Syllabus/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Views
// =============================================================================

/// How long a success notice stays visible before the edit view returns to
/// the listing.
pub const REDIRECT_DELAY_MS: u32 = 1500;

/// Extension used for downloads whose MIME type is not in the lookup table.
pub const FALLBACK_EXTENSION: &str = ".pdf";

/// File types offered by the upload picker.
pub const ACCEPTED_UPLOAD_EXTENSIONS: &str = ".pdf,.doc,.docx,.ppt,.pptx,.xls,.xlsx,.txt,\
.jpg,.jpeg,.png,.gif,.mp4,.avi,.mov,.zip,.rar,.py,.java,.cpp,.c,.html,.css,.js,.json,.md";

/// Page size the server applies when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Where the API lives and how to authenticate against it.
#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    base_url: Url,
    token: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiConfig {
    /// Parses `base_url`, which must be an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url}: not a base URL")));
        }

        Ok(Self {
            base_url: parsed,
            token: None,
        })
    }

    /// Resolves the base URL from the environment.
    ///
    /// Search order:
    /// 1. `$SYLLABUS_API_URL` at runtime (desktop)
    /// 2. `SYLLABUS_API_URL` captured at compile time (web builds)
    /// 3. [`DEFAULT_API_URL`]
    ///
    /// On desktop the token is taken from `$SYLLABUS_API_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| option_env!("SYLLABUS_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = std::env::var(API_TOKEN_ENV).ok();
        Ok(Self::new(&base)?.with_token(token))
    }

    /// Attaches a bearer token. Blank tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so identifiers can be passed verbatim.
    /// An empty final segment produces a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so path_segments_mut succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
