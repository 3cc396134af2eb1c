//! Operations the views invoke.
//!
//! Each function is one user action: it validates locally, talks to the
//! [`MaterialsApi`], and returns either the new state to render or an error
//! carrying the message to show. Nothing here keeps state between calls;
//! after a mutation the caller re-reads from the API.

use crate::api::MaterialsApi;
use crate::download::resolve_download_filename;
use crate::draft::{MaterialDraft, SelectedFile};
use crate::error::{DownloadError, MutationError, Operation, SubmitError};
use crate::filter::MaterialFilter;
use crate::material::{Material, MaterialPage};
use tracing::{error, info, warn};

/// Hands downloaded bytes to the user (browser download, native save dialog).
#[async_trait::async_trait(?Send)]
pub trait FileSaver {
    async fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String>;
}

/// Asks the user to confirm a destructive action.
#[async_trait::async_trait(?Send)]
pub trait Confirmer {
    async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
}

/// Listing state after a delete: the page to show and the filter it was
/// fetched with.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshedListing {
    pub filter: MaterialFilter,
    pub page: MaterialPage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Metadata changed in place.
    Updated(Material),
    /// The record was deleted and re-created with the new file; the
    /// material now has a new identifier.
    Replaced(Material),
}

impl EditOutcome {
    pub fn material(&self) -> &Material {
        match self {
            EditOutcome::Updated(m) | EditOutcome::Replaced(m) => m,
        }
    }
}

/// Confirmation text for deleting from the listing.
pub fn delete_prompt(title: &str) -> String {
    format!("Are you sure you want to delete \"{title}\"?")
}

/// Confirmation text for deleting from the edit view.
pub fn delete_prompt_irreversible(title: &str) -> String {
    format!("{} This action cannot be undone.", delete_prompt(title))
}

/// Reads one page of materials. Failures are logged and render as an empty
/// listing.
pub async fn fetch_materials<A>(api: &A, filter: &MaterialFilter) -> MaterialPage
where
    A: MaterialsApi + ?Sized,
{
    match api.list(filter).await {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to fetch materials: {}", e);
            MaterialPage::default()
        }
    }
}

/// Downloads a material's file and passes it to `saver`.
///
/// Returns the filename the file was offered under.
pub async fn download_material<A, S>(
    api: &A,
    saver: &S,
    material: &Material,
) -> Result<String, DownloadError>
where
    A: MaterialsApi + ?Sized,
    S: FileSaver + ?Sized,
{
    let file = api
        .download(&material.id)
        .await
        .map_err(DownloadError::Fetch)?;

    let filename = resolve_download_filename(
        file.content_disposition.as_deref(),
        &material.title,
        &material.file_type,
    );
    let mime = file.mime_or(&material.file_type);

    saver
        .save(&filename, mime, &file.bytes)
        .await
        .map_err(DownloadError::Save)?;

    info!("Downloaded {} ({} bytes)", filename, file.bytes.len());
    Ok(filename)
}

/// Deletes after the user confirms `prompt`. A declined prompt issues no call.
pub async fn delete_material<A, C>(
    api: &A,
    confirmer: &C,
    id: &str,
    prompt: &str,
) -> Result<DeleteOutcome, MutationError>
where
    A: MaterialsApi + ?Sized,
    C: Confirmer + ?Sized,
{
    if !confirmer.confirm(prompt).await {
        return Ok(DeleteOutcome::Cancelled);
    }

    api.delete(id)
        .await
        .map_err(|e| MutationError::new(Operation::Delete, e))?;

    info!("Deleted material {}", id);
    Ok(DeleteOutcome::Deleted)
}

/// Listing delete: confirm by title, delete, then re-read the current page.
///
/// Returns `None` when the user cancelled, and the refreshed page otherwise.
pub async fn delete_and_refresh<A, C>(
    api: &A,
    confirmer: &C,
    material: &Material,
    filter: &MaterialFilter,
) -> Result<Option<RefreshedListing>, MutationError>
where
    A: MaterialsApi + ?Sized,
    C: Confirmer + ?Sized,
{
    let prompt = delete_prompt(&material.title);
    if delete_material(api, confirmer, &material.id, &prompt).await? == DeleteOutcome::Cancelled {
        return Ok(None);
    }

    let mut filter = filter.clone();
    let mut page = fetch_materials(api, &filter).await;

    // Deleting the last item on a trailing page leaves nothing to show
    if page.is_empty() && filter.page > 1 {
        filter.go_to_page(filter.page - 1);
        info!("Page emptied by delete, stepping back to page {}", filter.page);
        page = fetch_materials(api, &filter).await;
    }

    Ok(Some(RefreshedListing { filter, page }))
}

/// Validates the upload form and creates the material.
pub async fn upload_material<A>(
    api: &A,
    draft: &MaterialDraft,
    file: Option<&SelectedFile>,
) -> Result<Material, SubmitError>
where
    A: MaterialsApi + ?Sized,
{
    let request = draft.to_upload(file)?;

    let material = api
        .upload(&request)
        .await
        .map_err(|e| MutationError::new(Operation::Upload, e))?;

    info!(
        "Uploaded {} as {} ({})",
        request.file.name,
        material.id,
        request.file.size_label()
    );
    Ok(material)
}

/// Loads a material and the draft that pre-populates the edit form.
pub async fn load_for_edit<A>(api: &A, id: &str) -> Result<(Material, MaterialDraft), MutationError>
where
    A: MaterialsApi + ?Sized,
{
    let material = api
        .get(id)
        .await
        .map_err(|e| MutationError::new(Operation::Load, e))?;
    let draft = MaterialDraft::from_material(&material);
    Ok((material, draft))
}

/// Saves the edit form.
///
/// Without a replacement file only the metadata is updated. With one, the
/// existing record is deleted and a new one uploaded with the edited
/// metadata. That path is not transactional: if the upload fails after the
/// delete succeeded, the material is gone and
/// [`SubmitError::ReplacementLost`] is returned.
pub async fn save_edit<A>(
    api: &A,
    id: &str,
    draft: &MaterialDraft,
    replacement: Option<&SelectedFile>,
) -> Result<EditOutcome, SubmitError>
where
    A: MaterialsApi + ?Sized,
{
    let Some(file) = replacement else {
        let update = draft.to_update()?;
        let material = api
            .update(id, &update)
            .await
            .map_err(|e| MutationError::new(Operation::Update, e))?;
        return Ok(EditOutcome::Updated(material));
    };

    // Validate everything before the destructive step
    let request = draft.to_upload(Some(file))?;

    api.delete(id)
        .await
        .map_err(|e| MutationError::new(Operation::Update, e))?;

    match api.upload(&request).await {
        Ok(material) => {
            info!("Replaced material {} with {}", id, material.id);
            Ok(EditOutcome::Replaced(material))
        }
        Err(e) => {
            warn!(
                "Material {} was deleted but its replacement upload failed: {}",
                id, e
            );
            Err(SubmitError::ReplacementLost(e))
        }
    }
}
