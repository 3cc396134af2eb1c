//! Error types for syllabus-core.
//!
//! Errors fall into three groups: problems talking to the API ([`ApiError`]),
//! form validation that stops a submission before any request is made
//! ([`DraftError`]), and failed mutations that the views surface to the user
//! ([`MutationError`], [`SubmitError`]).

use thiserror::Error;

/// Errors returned by a [`MaterialsApi`](crate::api::MaterialsApi) implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The configured base URL or a derived endpoint is not a valid URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (network, CORS, timeout)
    #[error("Request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status
    #[error("Server returned {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },
    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable detail supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::Status {
            status: 404,
            detail: Some(detail.into()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Form validation failures. No request is issued when one of these occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please select a file")]
    MissingFile,
    #[error("Title is required")]
    MissingTitle,
    #[error("Week must be a positive whole number (got \"{0}\")")]
    InvalidWeek(String),
}

/// The user-initiated operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Upload,
    Update,
    Delete,
}

impl Operation {
    /// Message shown when the server gives no detail of its own.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load material",
            Operation::Upload => "Upload failed",
            Operation::Update => "Update failed",
            Operation::Delete => "Failed to delete material",
        }
    }
}

/// A failed call made on behalf of an [`Operation`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {source}", .op.fallback_message())]
pub struct MutationError {
    pub op: Operation,
    #[source]
    pub source: ApiError,
}

impl MutationError {
    pub fn new(op: Operation, source: ApiError) -> Self {
        Self { op, source }
    }

    /// The server's own detail text when present, otherwise the generic
    /// message for the operation.
    pub fn user_message(&self) -> String {
        self.source
            .detail()
            .map(str::to_string)
            .unwrap_or_else(|| self.op.fallback_message().to_string())
    }
}

/// Errors from submitting the upload or edit form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Failed(#[from] MutationError),
    /// The old record was deleted but the replacement upload failed.
    #[error("Original material was deleted but the replacement upload failed: {0}")]
    ReplacementLost(#[source] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::Failed(err) => err.user_message(),
            SubmitError::ReplacementLost(err) => format!(
                "The original file was deleted, but uploading the replacement failed ({}). \
                 The material no longer exists; upload it again from the upload page.",
                err.detail().unwrap_or("no detail from server")
            ),
        }
    }

    /// True when the failure left the server without the material.
    pub fn is_data_loss(&self) -> bool {
        matches!(self, SubmitError::ReplacementLost(_))
    }
}

/// Errors from fetching a material's file and handing it to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("Download failed: {0}")]
    Fetch(#[source] ApiError),
    #[error("Could not save file: {0}")]
    Save(String),
}
