//! In-process [`MaterialsApi`] for tests.
//!
//! Stores materials in a `Vec`, mirrors the server's filtering and paging
//! rules closely enough for the views, records every call in order, and can
//! be told to fail a given kind of call.

use super::{DownloadedFile, MaterialsApi};
use crate::access::User;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::download::extension_for_mime;
use crate::draft::{parse_tags, MaterialUpdate, UploadRequest};
use crate::error::ApiError;
use crate::filter::MaterialFilter;
use crate::material::{Material, MaterialPage};
use std::collections::HashMap;
use std::sync::RwLock;

/// A call received by [`InMemoryMaterialsApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List(MaterialFilter),
    Get(String),
    Download(String),
    Upload(UploadRequest),
    Update(String, MaterialUpdate),
    Delete(String),
    CurrentUser,
}

impl ApiCall {
    pub fn kind(&self) -> CallKind {
        match self {
            ApiCall::List(_) => CallKind::List,
            ApiCall::Get(_) => CallKind::Get,
            ApiCall::Download(_) => CallKind::Download,
            ApiCall::Upload(_) => CallKind::Upload,
            ApiCall::Update(..) => CallKind::Update,
            ApiCall::Delete(_) => CallKind::Delete,
            ApiCall::CurrentUser => CallKind::CurrentUser,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    List,
    Get,
    Download,
    Upload,
    Update,
    Delete,
    CurrentUser,
}

struct StoredMaterial {
    material: Material,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct State {
    /// Oldest first.
    materials: Vec<StoredMaterial>,
    next_id: u64,
    user: Option<User>,
    failures: HashMap<CallKind, ApiError>,
    calls: Vec<ApiCall>,
}

#[derive(Default)]
pub struct InMemoryMaterialsApi {
    state: RwLock<State>,
}

fn poisoned<E: std::fmt::Display>(e: E) -> ApiError {
    ApiError::Request(format!("Lock poisoned: {}", e))
}

impl InMemoryMaterialsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user returned by `current_user`.
    pub fn with_user(self, user: User) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.user = Some(user);
        }
        self
    }

    /// Seeds an existing material and its file contents.
    pub fn with_material(self, material: Material, bytes: Vec<u8>) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.materials.push(StoredMaterial { material, bytes });
        }
        self
    }

    /// Makes every later call of `kind` fail with `error`.
    pub fn fail_on(&self, kind: CallKind, error: ApiError) {
        if let Ok(mut state) = self.state.write() {
            state.failures.insert(kind, error);
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    pub fn call_kinds(&self) -> Vec<CallKind> {
        self.calls().iter().map(ApiCall::kind).collect()
    }

    /// Currently stored materials, oldest first.
    pub fn materials(&self) -> Vec<Material> {
        self.state
            .read()
            .map(|state| state.materials.iter().map(|m| m.material.clone()).collect())
            .unwrap_or_default()
    }

    /// Records `call` and returns the injected failure for its kind, if any.
    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        let mut state = self.state.write().map_err(poisoned)?;
        let kind = call.kind();
        state.calls.push(call);
        match state.failures.get(&kind) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn matches_filter(material: &Material, filter: &MaterialFilter) -> bool {
    if let Some(category) = filter.category {
        if material.category != category {
            return false;
        }
    }

    let week = filter.week.trim();
    if !week.is_empty() && material.week.map(|w| w.to_string()).as_deref() != Some(week) {
        return false;
    }

    let contains = |haystack: Option<&str>, needle: &str| {
        haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
    };

    let topic = filter.topic.trim();
    if !topic.is_empty() && !contains(material.topic.as_deref(), topic) {
        return false;
    }

    let search = filter.search.trim();
    if !search.is_empty()
        && !contains(Some(&material.title), search)
        && !contains(material.description.as_deref(), search)
    {
        return false;
    }

    true
}

fn not_found() -> ApiError {
    ApiError::not_found("Material not found")
}

#[async_trait::async_trait(?Send)]
impl MaterialsApi for InMemoryMaterialsApi {
    async fn list(&self, filter: &MaterialFilter) -> Result<MaterialPage, ApiError> {
        self.record(ApiCall::List(filter.clone()))?;
        let state = self.state.read().map_err(poisoned)?;

        // Newest first, like the server
        let matching: Vec<Material> = state
            .materials
            .iter()
            .rev()
            .map(|stored| &stored.material)
            .filter(|material| matches_filter(material, filter))
            .cloned()
            .collect();

        let page_size = DEFAULT_PAGE_SIZE as usize;
        let page = filter.page.max(1);
        let offset = (page as usize - 1) * page_size;

        Ok(MaterialPage {
            total: matching.len(),
            page,
            page_size: DEFAULT_PAGE_SIZE,
            materials: matching.into_iter().skip(offset).take(page_size).collect(),
        })
    }

    async fn get(&self, id: &str) -> Result<Material, ApiError> {
        self.record(ApiCall::Get(id.to_string()))?;
        let state = self.state.read().map_err(poisoned)?;
        state
            .materials
            .iter()
            .find(|stored| stored.material.id == id)
            .map(|stored| stored.material.clone())
            .ok_or_else(not_found)
    }

    async fn download(&self, id: &str) -> Result<DownloadedFile, ApiError> {
        self.record(ApiCall::Download(id.to_string()))?;
        let state = self.state.read().map_err(poisoned)?;
        let stored = state
            .materials
            .iter()
            .find(|stored| stored.material.id == id)
            .ok_or_else(not_found)?;

        let material = &stored.material;
        let ext = extension_for_mime(&material.file_type).unwrap_or_default();
        let safe_title = material.title.replace(['/', '\\'], "-");

        Ok(DownloadedFile {
            bytes: stored.bytes.clone(),
            content_disposition: Some(format!("attachment; filename=\"{safe_title}{ext}\"")),
            content_type: Some(material.file_type.clone()),
        })
    }

    async fn upload(&self, request: &UploadRequest) -> Result<Material, ApiError> {
        self.record(ApiCall::Upload(request.clone()))?;
        let mut state = self.state.write().map_err(poisoned)?;

        state.next_id += 1;
        let tags = request.tags.as_deref().map(parse_tags).unwrap_or_default();
        let material = Material {
            id: format!("mem-{}", state.next_id),
            title: request.title.clone(),
            description: Some(request.description.clone()),
            category: request.category,
            week: request.week,
            topic: request.topic.clone(),
            tags,
            file_type: request
                .file
                .content_type
                .clone()
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            created_at: String::new(),
            updated_at: None,
        };

        state.materials.push(StoredMaterial {
            material: material.clone(),
            bytes: request.file.bytes.clone(),
        });
        Ok(material)
    }

    async fn update(&self, id: &str, update: &MaterialUpdate) -> Result<Material, ApiError> {
        self.record(ApiCall::Update(id.to_string(), update.clone()))?;
        let mut state = self.state.write().map_err(poisoned)?;
        let stored = state
            .materials
            .iter_mut()
            .find(|stored| stored.material.id == id)
            .ok_or_else(not_found)?;

        let material = &mut stored.material;
        material.title = update.title.clone();
        material.description = Some(update.description.clone());
        material.category = update.category;
        material.week = update.week;
        material.topic = update.topic.clone();
        material.tags = update.tags.clone();
        Ok(material.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.to_string()))?;
        let mut state = self.state.write().map_err(poisoned)?;
        let before = state.materials.len();
        state.materials.retain(|stored| stored.material.id != id);
        if state.materials.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record(ApiCall::CurrentUser)?;
        let state = self.state.read().map_err(poisoned)?;
        state.user.clone().ok_or(ApiError::Status {
            status: 401,
            detail: Some("Could not validate credentials".to_string()),
        })
    }
}
