//! The `/materials` API consumed by every view.
//!
//! [`MaterialsApi`] abstracts over the transport so workflows can be driven
//! by the real HTTP client in the app and by an in-process implementation
//! in tests.
//!
//! # Implementations
//!
//! - [`HttpMaterialsApi`] - reqwest client (browser `fetch` on web, hyper on desktop)
//! - [`InMemoryMaterialsApi`] - records calls and supports failure injection

mod http;
mod memory;

pub use http::HttpMaterialsApi;
pub use memory::{ApiCall, CallKind, InMemoryMaterialsApi};

use crate::access::User;
use crate::draft::{MaterialUpdate, UploadRequest};
use crate::error::ApiError;
use crate::filter::MaterialFilter;
use crate::material::{Material, MaterialPage};

/// File payload returned by `GET /materials/{id}/download`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DownloadedFile {
    pub bytes: Vec<u8>,
    pub content_disposition: Option<String>,
    pub content_type: Option<String>,
}

impl DownloadedFile {
    /// Response content type, or `declared` when the server sent none.
    pub fn mime_or<'a>(&'a self, declared: &'a str) -> &'a str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(declared)
    }
}

/// Client for the material endpoints.
///
/// Futures are `?Send`: the browser executor is single-threaded and the
/// desktop UI drives them from its own task.
#[async_trait::async_trait(?Send)]
pub trait MaterialsApi {
    /// `GET /materials/?category=&week=&search=&topic=&page=`
    async fn list(&self, filter: &MaterialFilter) -> Result<MaterialPage, ApiError>;

    /// `GET /materials/{id}`
    async fn get(&self, id: &str) -> Result<Material, ApiError>;

    /// `GET /materials/{id}/download`
    async fn download(&self, id: &str) -> Result<DownloadedFile, ApiError>;

    /// `POST /materials/upload` (multipart)
    async fn upload(&self, request: &UploadRequest) -> Result<Material, ApiError>;

    /// `PUT /materials/{id}` (JSON)
    async fn update(&self, id: &str, update: &MaterialUpdate) -> Result<Material, ApiError>;

    /// `DELETE /materials/{id}`
    async fn delete(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /auth/me`
    async fn current_user(&self) -> Result<User, ApiError>;
}
