//! Syllabus - course-material portal.
//!
//! Students browse, filter, and download teaching files; administrators
//! upload, edit, and delete them. Every operation goes through the
//! `/materials` HTTP API, via the client in [`syllabus_core::api`].
//!
//! # Platform Support
//!
//! - **Web (WASM)**: browser downloads through object URLs, `window.confirm`,
//!   bearer token from `localStorage`
//! - **Desktop**: native save and confirmation dialogs, bearer token from
//!   `SYLLABUS_API_TOKEN`

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod utils;
