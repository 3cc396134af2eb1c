//! # Syllabus Core
//!
//! Platform-independent client logic for the Syllabus course-material portal.
//!
//! The UI crate renders three views (listing, upload, edit) on top of the
//! types and operations defined here, so everything that can be decided
//! without a DOM lives in this crate and is tested on native.
//!
//! ## Modules
//!
//! - [`material`] - Material records, categories, and paginated listings
//! - [`draft`] - Form drafts, tag parsing, and request assembly
//! - [`filter`] - Listing filter and query-string construction
//! - [`download`] - MIME lookup and download filename resolution
//! - [`dropzone`] - Drag-and-drop state machine
//! - [`access`] - Signed-in user and view gating
//! - [`api`] - The `/materials` API trait and its HTTP/in-memory implementations
//! - [`workflow`] - The operations the views invoke
//! - [`config`] - Configuration constants and API endpoint resolution
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod access;
pub mod api;
pub mod config;
pub mod download;
pub mod draft;
pub mod dropzone;
pub mod error;
pub mod filter;
pub mod material;
pub mod workflow;

pub use access::{gate, Access, AuthSnapshot, GateDecision, RedirectTarget, Role, User};
pub use api::{DownloadedFile, HttpMaterialsApi, InMemoryMaterialsApi, MaterialsApi};
pub use config::ApiConfig;
pub use draft::{join_tags, parse_tags, MaterialDraft, MaterialUpdate, SelectedFile, UploadRequest};
pub use error::{ApiError, DownloadError, DraftError, MutationError, Operation, SubmitError};
pub use filter::MaterialFilter;
pub use material::{Category, Material, MaterialPage};
